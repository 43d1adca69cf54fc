use crate::state::form::{FieldSpec, FormSchema, InputKind, NumberKind};

pub const CATEGORY_FIELD: &str = "categorie";
pub const PRODUCER_FIELD: &str = "producer";
pub const IMAGE_FIELD: &str = "image";

pub static PRODUCT_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("name", "Nom", InputKind::Text).required("Name is required"),
    FieldSpec::new("price", "Price", InputKind::Number(NumberKind::Float))
        .required("Price is required"),
    FieldSpec::new("quantity", "Quantity KG", InputKind::Number(NumberKind::Integer))
        .required("Quantity is required"),
    FieldSpec::new(
        CATEGORY_FIELD,
        "Categorie",
        InputKind::Select {
            placeholder: "Select a category",
        },
    )
    .required("Categorie is required"),
    FieldSpec::new(
        PRODUCER_FIELD,
        "Producer",
        InputKind::Select {
            placeholder: "Select a producer",
        },
    )
    .required("Producer is required"),
    FieldSpec::new(
        IMAGE_FIELD,
        "Image",
        InputKind::File {
            accept: ".jpg,.jpeg,.png",
        },
    ),
];

pub static PRODUCT_FORM: FormSchema = FormSchema::new(&PRODUCT_FIELDS);
