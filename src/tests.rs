use super::*;

// The tests in this file are only for the public streaming API. The
// pairwise classifier, decoder, and segmenter have their own tests next
// to their modules, where most of the interesting testing happens.

use pretty_assertions::assert_eq;

#[test]
fn machine_basics() {
    use ::u8char::AsU8Chars;

    let mut clusters: Vec<String> = Vec::new();
    let mut current_cluster = String::new();
    let mut machine = ClusterMachine::new();
    let input = "Hello!\r\nBeep 🧑‍🌾";

    for c in input.u8chars() {
        if machine.next_u8char(c) == ClusterAction::Split {
            if !current_cluster.is_empty() {
                clusters.push(current_cluster.clone());
                current_cluster.clear();
            }
        }
        current_cluster.push_str(c.as_str());
    }
    if !current_cluster.is_empty() {
        clusters.push(current_cluster.clone());
    }

    assert_eq!(
        clusters,
        &[
            "H", "e", "l", "l", "o", "!", "\r\n", "B", "e", "e", "p", " ", "🧑‍🌾"
        ]
    );
}

#[test]
fn machine_agrees_with_clusters_iterator() {
    let input = "née 한국어 🇦🇺🇦🇹 👩🏼‍🚀ok\r\n";

    let mut machine = ClusterMachine::new();
    let mut from_machine: Vec<String> = Vec::new();
    for c in input.chars() {
        if machine.next_char(c) == ClusterAction::Split {
            from_machine.push(String::new());
        }
        if let Some(last) = from_machine.last_mut() {
            last.push(c);
        }
    }

    let from_iterator: Vec<&str> = clusters(input).collect();
    assert_eq!(from_machine, from_iterator);
}

#[test]
fn end_of_input_forces_boundaries() {
    use ::u8char::AsU8Chars;

    let mut machine = ClusterMachine::new();
    let input = "Hello!\r\nBeep 🧑‍🌾";

    for c in input.u8chars() {
        machine.end_of_input(); // effectively forces a cluster boundary
        if machine.next_u8char(c) != ClusterAction::Split {
            panic!("non-split after end_of_input came before {c:?}");
        }
    }
}

#[test]
fn first_character_always_splits() {
    for c in ['a', '\u{0300}', '\u{200D}', '\u{1F1E6}'] {
        let mut machine = ClusterMachine::new();
        assert_eq!(machine.next_char(c), ClusterAction::Split, "for {c:?}");
    }
}

#[test]
fn reexported_segmenter_smoke_test() {
    assert_eq!(next_cluster_len("🇦🇺!".as_bytes()), 8);
    assert_eq!(decode(b"\xF0\x9F\x87\xA6"), (Decoded::Scalar(0x1F1E6), 4));
    assert!(!is_boundary(0x0D, 0x0A, None));
    assert!(
        PropertySet::of(0x1F1E6).has(Property::RegionalIndicator),
        "property lookup is part of the public surface"
    );
}
