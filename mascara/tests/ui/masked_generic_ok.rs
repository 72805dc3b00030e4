use mascara::{MaskFields, Masked};

#[derive(Masked)]
struct Contact<P, A> {
    #[mask(phone)]
    phone: P,
    #[mask(nested)]
    extra: A,
    label: &'static str,
}

#[derive(Masked)]
struct Nothing;

fn main() {
    let contact = Contact {
        phone: vec![String::from("11987654321")],
        extra: Nothing,
        label: "home",
    };

    let _ = contact.mask_fields();
}
