#![no_main]

use libfuzzer_sys::fuzz_target;
use triangle_quadrature::{FormulaCatalog, CUSTOM_FORMULA_KEY};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(catalog) = FormulaCatalog::from_json_str(text) {
            let keys = catalog.ordered_keys();
            assert_eq!(keys.last().map(String::as_str), Some(CUSTOM_FORMULA_KEY));
            assert_eq!(keys.len(), catalog.len() + 1);
        }
    }
});
