#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Darf nie paniken; bei Erfolg sind Knoten und Gewichte gleich lang
        if let Ok(rule) = triangle_quadrature::validate(text) {
            assert_eq!(rule.nodes.len(), rule.weights.len());
        }
    }
});
