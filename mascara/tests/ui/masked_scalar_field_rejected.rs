use mascara::Masked;

#[derive(Masked)]
struct Account {
    #[mask(cpf)]
    id: u64,
}

fn main() {
    let account = Account { id: 1 };
    let _ = account.id;
}
