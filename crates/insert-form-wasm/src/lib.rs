//! Insert-Form Validation WASM
//!
//! WebAssembly bindings for the insert page. The page forwards every `keyup`
//! of a tracked input to `FormController.onFieldEdited` and styles the input
//! and the submit button from the returned flags.
//!
//! # Example (JavaScript)
//! ```javascript
//! const form = new FormController();
//! input.addEventListener('keyup', () => {
//!     const { fieldValid, allValid } = form.onFieldEdited(input.name, input.value);
//!     input.style.borderColor = fieldValid ? '#000' : '#f00';
//!     submit.disabled = !allValid;
//! });
//! ```

use insert_form_validation::{
    self as core, EditOutcome, FieldKey, FieldRules, FormConfig, FormError, FormSession,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than JS Maps for the snapshot
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validation state of one insert form, owned by the page
#[wasm_bindgen]
pub struct FormController {
    session: FormSession,
}

#[wasm_bindgen]
impl FormController {
    /// Controller with the default bounds (names 0-50, email 4-256)
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormController {
        FormController {
            session: FormSession::new(),
        }
    }

    /// Controller with custom length bounds
    #[wasm_bindgen(js_name = withBounds)]
    pub fn with_bounds(
        text_min: usize,
        text_max: usize,
        email_min: usize,
        email_max: usize,
    ) -> Result<FormController, JsValue> {
        let mut config = FormConfig::default();
        config.text.min_length = text_min;
        config.text.max_length = text_max;
        config.email.min_length = email_min;
        config.email.max_length = email_max;

        let rules = FieldRules::from_config(&config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FormController {
            session: FormSession::with_rules(rules),
        })
    }

    /// Validate the current value of an input
    ///
    /// # Returns
    /// `{ field, fieldValid, allValid }`; throws for an unknown input name
    #[wasm_bindgen(js_name = onFieldEdited)]
    pub fn on_field_edited(&mut self, input_name: &str, value: &str) -> Result<JsValue, JsValue> {
        let outcome = self.edit(input_name, value).map_err(|e| {
            let message = e.to_string();
            web_sys::console::warn_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })?;
        to_js(&outcome)
    }

    #[wasm_bindgen(js_name = allValid)]
    pub fn all_valid(&self) -> bool {
        self.session.all_valid()
    }

    #[wasm_bindgen(js_name = isFieldValid)]
    pub fn is_field_valid(&self, input_name: &str) -> Result<bool, JsValue> {
        let key = input_name
            .parse::<FieldKey>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.session.is_field_valid(key))
    }

    /// `{ firstName: bool, lastName: bool, ... }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.snapshot())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Input names of all tracked fields, in form order
    #[wasm_bindgen(js_name = fieldNames)]
    pub fn field_names() -> Vec<JsValue> {
        FieldKey::ALL
            .iter()
            .map(|key| JsValue::from_str(key.input_name()))
            .collect()
    }
}

impl FormController {
    fn edit(&mut self, input_name: &str, value: &str) -> Result<EditOutcome, FormError> {
        self.session.on_input_edited(input_name, value)
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick email validation with the default bounds
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::EmailValidator::DEFAULT.is_valid(email)
}

/// Quick postal code validation
#[wasm_bindgen(js_name = isValidPostalCode)]
pub fn is_valid_postal_code_js(value: &str) -> bool {
    core::postal_code_rule(value)
}

/// Quick phone number validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(value: &str) -> bool {
    core::phone_rule(value)
}
