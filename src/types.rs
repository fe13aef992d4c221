use serde::Serialize;

/// One of the four CRUD forms the user can bring up from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Menu order
    pub const ALL: [Operation; 4] = [
        Operation::List,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn method(&self) -> reqwest::Method {
        match self {
            Operation::List => reqwest::Method::GET,
            Operation::Create => reqwest::Method::POST,
            Operation::Update => reqwest::Method::PUT,
            Operation::Delete => reqwest::Method::DELETE,
        }
    }

    /// Human-readable description shown next to the method in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Operation::List => "List all pizzas",
            Operation::Create => "Create a pizza",
            Operation::Update => "Update a pizza's price",
            Operation::Delete => "Delete a pizza",
        }
    }

    /// Editable fields of this operation's form, in display order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Operation::List => &[],
            Operation::Create => &[FormField::Name, FormField::Price],
            Operation::Update => &[FormField::Id, FormField::Price],
            Operation::Delete => &[FormField::Id],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Price,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Name => "Name",
            FormField::Price => "Price",
        }
    }
}

/// Body of a create request. The id is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPizza {
    pub name: String,
    pub price: f64,
}

/// Body of a partial update request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceUpdate {
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditingField,
    EnteringUrl,
}
