use mascara::Masked;

#[derive(Masked)]
union Bits {
    value: u32,
}

fn main() {
    let bits = Bits { value: 1 };
    let _ = unsafe { bits.value };
}
