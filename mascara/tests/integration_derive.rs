//! Tests for `#[derive(Masked)]` field-level masking.

#![cfg(feature = "derive")]

use std::marker::PhantomData;

use mascara::{MaskApplicable, MaskFields, Masked};

mod named_structs {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Masked)]
    struct Customer {
        #[mask(name)]
        name: String,
        #[mask(cpf)]
        cpf: String,
        #[mask(phone)]
        phone: Option<String>,
        #[mask(zipcode)]
        zipcodes: Vec<String>,
        id: u64,
    }

    fn customer() -> Customer {
        Customer {
            name: "MARIA DA SILVA".into(),
            cpf: "12345678901".into(),
            phone: Some("11987654321".into()),
            zipcodes: vec!["01310100".into(), "20040002".into()],
            id: 7,
        }
    }

    #[test]
    fn masks_annotated_fields() {
        let masked = customer().mask_fields();
        assert_eq!(masked.name, "Maria da Silva");
        assert_eq!(masked.cpf, "123.456.789-01");
        assert_eq!(masked.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(masked.zipcodes, ["01310-100", "20040-002"]);
        assert_eq!(masked.id, 7);
    }

    #[test]
    fn unmask_inverts_invertible_fields() {
        let unmasked = customer().mask_fields().unmask_fields();
        assert_eq!(unmasked.name, "Maria da Silva");
        assert_eq!(unmasked.cpf, "12345678901");
        assert_eq!(unmasked.phone.as_deref(), Some("+5511987654321"));
        assert_eq!(unmasked.zipcodes, ["01310100", "20040002"]);
    }

    #[test]
    fn absent_values_stay_absent() {
        let mut customer = customer();
        customer.phone = None;
        assert_eq!(customer.mask_fields().phone, None);
    }
}

mod nested_structs {
    use super::*;

    #[derive(Debug, Masked)]
    struct Address {
        #[mask(zipcode)]
        zipcode: String,
        street: String,
    }

    #[derive(Debug, Masked)]
    struct Order {
        #[mask(currency)]
        total: String,
        #[mask(nested)]
        address: Address,
        #[mask(nested)]
        previous: Vec<Address>,
    }

    #[test]
    fn walks_nested_fields() {
        let order = Order {
            total: "123456".into(),
            address: Address {
                zipcode: "01310100".into(),
                street: "Av. Paulista".into(),
            },
            previous: vec![Address {
                zipcode: "20040002".into(),
                street: "Rua do Ouvidor".into(),
            }],
        }
        .mask_fields();

        assert_eq!(order.total, "1.234,56");
        assert_eq!(order.address.zipcode, "01310-100");
        assert_eq!(order.address.street, "Av. Paulista");
        assert_eq!(order.previous[0].zipcode, "20040-002");
    }

    #[test]
    fn currency_unmasks_to_plain_decimal() {
        let order = Order {
            total: "1.234,56".into(),
            address: Address {
                zipcode: "01310-100".into(),
                street: String::new(),
            },
            previous: Vec::new(),
        }
        .unmask_fields();

        assert_eq!(order.total, "1234.56");
        assert_eq!(order.address.zipcode, "01310100");
    }
}

mod tuple_and_unit_structs {
    use super::*;

    #[derive(Debug, PartialEq, Masked)]
    struct Cnpj(#[mask(cnpj)] String, u8);

    #[derive(Debug, PartialEq, Masked)]
    struct Marker;

    #[test]
    fn tuple_fields_are_masked_by_position() {
        let masked = Cnpj("11222333000181".into(), 3).mask_fields();
        assert_eq!(masked, Cnpj("11.222.333/0001-81".into(), 3));
    }

    #[test]
    fn unit_structs_pass_through() {
        assert_eq!(Marker.mask_fields(), Marker);
    }
}

mod generics {
    use super::*;

    #[derive(Debug, Masked)]
    struct Labeled<T> {
        #[mask(time)]
        value: T,
    }

    #[derive(Debug, Masked)]
    struct Typed<T> {
        #[mask(cpf)]
        id: String,
        _marker: PhantomData<T>,
    }

    struct NotMaskable;

    fn assert_applicable<T: MaskApplicable>() {}

    #[test]
    fn generic_fields_use_mask_applicable() {
        assert_applicable::<Option<String>>();
        let labeled = Labeled {
            value: Some(String::from("0930")),
        }
        .mask_fields();
        assert_eq!(labeled.value.as_deref(), Some("09:30"));
    }

    #[test]
    fn phantom_parameters_need_no_bound() {
        let typed: Typed<NotMaskable> = Typed {
            id: "12345678901".into(),
            _marker: PhantomData,
        };
        assert_eq!(typed.mask_fields().id, "123.456.789-01");
    }
}
