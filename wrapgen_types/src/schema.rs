use serde_derive::{Deserialize, Serialize};

/// One typed parameter of a wrappable function.
///
/// The declared type is kept as plain text: parsing deliberately accepts any
/// type name, and the generator's registry decides membership later.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// One schema entry describing a single remotely invokable function.
///
/// `name` is the public command name (dots allowed), `fun` the native
/// function symbol the generated wrapper invokes. Parameter order is the
/// positional array-decoding order and the native call's argument order.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Wrappable {
    pub name: String,
    pub fun: String,
    pub description: String,
    pub parameters: Vec<Parameter>,
}

/// A parsed wrapper schema: the dispatch-table basename plus the ordered
/// list of wrappables. Immutable after parse.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Schema {
    pub basename: String,
    pub wrappables: Vec<Wrappable>,
}
