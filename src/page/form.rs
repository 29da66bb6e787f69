//! Form model.
//!
//! # Responsibilities
//! - Hold a form's action, method, classes and ordered fields
//! - Evaluate constraint validity (required, max length, pattern)
//! - Snapshot current field values as submission pairs

use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }
}

impl FromStr for FormMethod {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to `get`, as an HTML form does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("post") {
            Ok(FormMethod::Post)
        } else {
            Ok(FormMethod::Get)
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input type of a control, as far as the page helpers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Date,
    Time,
}

/// A single named form control.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub disabled: bool,
    pub max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
            required: false,
            disabled: false,
            max_length: None,
            pattern: None,
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Attach a pattern constraint. The pattern must match the whole value.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(&format!("^(?:{})$", pattern))?);
        Ok(self)
    }

    /// Whether this control satisfies its constraints.
    ///
    /// Disabled controls are barred from validation.
    pub fn is_valid(&self) -> bool {
        if self.disabled {
            return true;
        }
        if self.value.is_empty() {
            return !self.required;
        }
        if let Some(max) = self.max_length {
            if self.value.chars().count() > max {
                return false;
            }
        }
        match &self.pattern {
            Some(re) => re.is_match(&self.value),
            None => true,
        }
    }
}

/// A form as the page currently holds it.
#[derive(Debug, Clone)]
pub struct Form {
    pub id: String,
    /// Target address; may be relative to the page URL. Empty means the page itself.
    pub action: String,
    pub method: FormMethod,
    classes: Vec<String>,
    fields: Vec<Field>,
}

impl Form {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method: FormMethod::default(),
            classes: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: FormMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Set the value of the first field with `name`. Returns false if absent.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn check_validity(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Names of the fields currently failing their constraints.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Current values as ordered name/value pairs.
    ///
    /// Disabled and unnamed controls are not submitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| !f.disabled && !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_form() -> Form {
        Form::new("patient", "/patients/new")
            .with_method(FormMethod::Post)
            .with_field(Field::new("name", "Ada").required())
            .with_field(Field::new("phone", "555-0100").pattern(r"\d{3}-\d{4}").unwrap())
            .with_field(Field::new("notes", "").max_length(10))
            .with_field(Field::new("csrf", "x").disabled())
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("POST".parse::<FormMethod>().unwrap(), FormMethod::Post);
        assert_eq!("get".parse::<FormMethod>().unwrap(), FormMethod::Get);
        assert_eq!("dialog".parse::<FormMethod>().unwrap(), FormMethod::Get);
    }

    #[test]
    fn test_validity() {
        let mut form = patient_form();
        assert!(form.check_validity());

        form.set_value("name", "");
        assert_eq!(form.invalid_fields(), vec!["name"]);

        form.set_value("name", "Ada");
        form.set_value("phone", "5550100");
        assert!(!form.check_validity());

        form.set_value("phone", "");
        form.set_value("notes", "a note that is too long");
        assert_eq!(form.invalid_fields(), vec!["notes"]);
    }

    #[test]
    fn test_pairs_skip_disabled() {
        let pairs = patient_form().to_pairs();
        let names: Vec<_> = pairs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "phone", "notes"]);
    }

    #[test]
    fn test_classes_are_unique() {
        let mut form = Form::new("f", "").with_class("needs-validation");
        form.add_class("needs-validation");
        assert_eq!(form.classes().len(), 1);
    }
}
