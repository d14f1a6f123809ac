#![no_main]

use libfuzzer_sys::fuzz_target;
use snipe::http::VariantSource;

fuzz_target!(|data: &[u8]| {
    let Some((selector, payload)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(payload) else {
        return;
    };

    let mut parts = input.splitn(3, '\u{0}');
    let (Some(marker), Some(template), Some(words)) = (parts.next(), parts.next(), parts.next())
    else {
        return;
    };
    let payloads: Vec<String> = words.lines().take(32).map(str::to_owned).collect();
    let simultaneous = selector % 2 == 1;

    let Ok(variants) = snipe::fuzzing::expand_input(template, marker, &payloads, simultaneous)
    else {
        debug_assert!(marker.is_empty());
        return;
    };

    let occurrences = template.matches(marker).count();
    let expected = if simultaneous {
        payloads.len()
    } else {
        payloads.len() * occurrences
    };
    debug_assert_eq!(variants.len(), expected);

    let stripped = template.len() - occurrences * marker.len();
    for variant in &variants {
        let VariantSource::Payload { value, .. } = &variant.source else {
            continue;
        };
        let inserted = if simultaneous {
            value.len() * occurrences
        } else {
            value.len()
        };
        debug_assert_eq!(variant.raw.len(), stripped + inserted);
    }
});
