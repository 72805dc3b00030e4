mod inner {
    use mascara::Masked;

    #[derive(Masked)]
    pub struct Document(#[mask(cnpj)] pub String);
}

fn main() {
    let document = mascara::MaskFields::mask_fields(inner::Document("11222333000181".into()));
    let _ = document.0;
}
