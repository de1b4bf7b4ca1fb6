/// A light accessory as recorded in the Control Center settings
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Accessory {
    name: String,
    address: String,
}

impl Accessory {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host name or IP address, exactly as the settings file has it
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Fields resolved so far from the children of one `<Accessory>` element.
///
/// A user defined name always replaces whatever name came before it, a plain
/// name only fills an empty slot and the last address seen wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccessoryFields {
    name: Option<String>,
    address: Option<String>,
}

impl AccessoryFields {
    pub fn new() -> AccessoryFields {
        AccessoryFields::default()
    }

    pub fn user_defined_name(&mut self, value: &str) {
        if let Some(value) = resolved(value) {
            self.name = Some(value);
        }
    }

    pub fn name(&mut self, value: &str) {
        if self.name.is_none() {
            self.name = resolved(value);
        }
    }

    pub fn address(&mut self, value: &str) {
        if let Some(value) = resolved(value) {
            self.address = Some(value);
        }
    }

    /// Freeze into an `Accessory`, if both fields were found
    pub fn build(self) -> Option<Accessory> {
        match (self.name, self.address) {
            (Some(name), Some(address)) => Some(Accessory { name, address }),
            _ => None,
        }
    }
}

// Blank text counts as missing; anything else is kept verbatim.
fn resolved(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
