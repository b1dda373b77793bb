/// A single `property: value` pair from an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Parsed inline style of one element. Property names and values are
/// lowercased and trimmed; fragments without a `:` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn parse(attr: &str) -> Self {
        let declarations = attr
            .split(';')
            .filter_map(|decl| {
                let (property, value) = decl.split_once(':')?;
                let property = property.trim().to_ascii_lowercase();
                if property.is_empty() {
                    return None;
                }
                Some(Declaration {
                    property,
                    value: value.trim().to_lowercase(),
                })
            })
            .collect();
        Self { declarations }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// True if `property` appears at all, whatever its value.
    pub fn declares(&self, property: &str) -> bool {
        self.declarations.iter().any(|d| d.property == property)
    }

    /// True if `property` appears with something other than an empty value.
    pub fn declares_value(&self, property: &str) -> bool {
        self.declarations
            .iter()
            .any(|d| d.property == property && !d.value.is_empty())
    }

    /// True if `property` has `keyword` among its whitespace-separated values,
    /// e.g. `text-decoration: underline dotted` has `underline`.
    pub fn has_keyword(&self, property: &str, keyword: &str) -> bool {
        self.declarations
            .iter()
            .filter(|d| d.property == property)
            .any(|d| d.value.split_whitespace().any(|v| v == keyword))
    }
}
