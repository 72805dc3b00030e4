use mascara::{MaskFields, Masked};

#[derive(Masked)]
struct Address {
    #[mask(zipcode)]
    zipcode: String,
}

#[derive(Masked)]
struct Customer {
    #[mask(cpf)]
    cpf: String,
    #[mask(nested)]
    address: Option<Address>,
}

fn main() {
    let customer = Customer {
        cpf: "12345678901".into(),
        address: Some(Address {
            zipcode: "01310100".into(),
        }),
    };

    let _ = customer.mask_fields().unmask_fields();
}
