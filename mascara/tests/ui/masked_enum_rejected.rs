use mascara::Masked;

#[derive(Masked)]
enum Status {
    Active,
}

fn main() {
    let _ = Status::Active;
}
