use super::*;

use pretty_assertions::assert_eq;

#[test]
fn empty_input() {
    assert_eq!(next_cluster_len(b""), 0);
}

#[test]
fn plain_text() {
    assert_eq!(next_cluster_len(b"ab"), 1);
    assert_eq!(next_cluster_len(b"a"), 1);
    assert_eq!(next_cluster_len("éa".as_bytes()), 2);
}

#[test]
fn crlf_is_one_cluster() {
    assert_eq!(next_cluster_len(b"\r\nx"), 2);
    assert_eq!(next_cluster_len(b"\n\r"), 1);
}

#[test]
fn combining_marks_extend_the_cluster() {
    // "a" + COMBINING GRAVE ACCENT + "b"
    assert_eq!(next_cluster_len("a\u{0300}b".as_bytes()), 3);
    // prepended character binds to what follows it
    assert_eq!(next_cluster_len("\u{0600}1 ".as_bytes()), 3);
}

#[test]
fn hangul_syllable() {
    // LV syllable + trailing jamo is a single user-perceived character
    assert_eq!(next_cluster_len("\u{AC00}\u{11A8}".as_bytes()), 6);
}

#[test]
fn regional_indicator_run() {
    // Three regional indicators: the first cluster takes exactly two,
    // the remainder starts a cluster of its own.
    let text = "\u{1F1E6}\u{1F1E7}\u{1F1E6}";
    let bytes = text.as_bytes();
    let first = next_cluster_len(bytes);
    assert_eq!(first, 8);
    assert_eq!(next_cluster_len(&bytes[first..]), 4);
}

#[test]
fn emoji_zwj_sequence_is_one_cluster() {
    // PERSON + ZWJ + SHEAF OF RICE (the "farmer" emoji)
    assert_eq!(next_cluster_len("\u{1F9D1}\u{200D}\u{1F33E}".as_bytes()), 11);
    // with a skin tone modifier on the base
    assert_eq!(
        next_cluster_len("\u{1F9D1}\u{1F3FB}\u{200D}\u{1F33E}x".as_bytes()),
        15
    );
}

#[test]
fn nul_terminates_the_scan() {
    // a NUL as the first code point is its own one-byte cluster
    assert_eq!(next_cluster_len(b"\0ab"), 1);
    // a NUL after text is a control character, so the cluster ends
    // before it
    assert_eq!(next_cluster_len(b"a\0b"), 1);
}

#[test]
fn malformed_input_bounds_the_cluster() {
    // a malformed lead is reported as its own cluster
    assert_eq!(next_cluster_len(b"\x80abc"), 1);
    assert_eq!(next_cluster_len(b"\xE2\x82"), 2);
    // a malformed sequence after a valid code point ends the cluster
    // without being consumed
    assert_eq!(next_cluster_len(b"a\x80b"), 1);
    assert_eq!(next_cluster_len(b"a\xC3"), 1);
    // a combining mark still joins when it is well-formed
    assert_eq!(next_cluster_len(b"a\xCC\x80\xFF"), 3);
}

#[test]
fn malformed_scan_terminates_within_bounds() {
    // Chopping any byte soup into clusters terminates, always makes
    // progress, and never reads past the end.
    let soups: &[&[u8]] = &[
        b"\xFF\xFE\x80\x80abc\0def",
        b"\xE2\x82\xE2\x82\xAC\xF0\x9F",
        b"\xC0\x80\xC0\x80\xC0\x80",
        "héllo wörld 🧑‍🌾".as_bytes(),
    ];
    for soup in soups {
        let mut offset = 0;
        let mut seen = 0;
        while offset < soup.len() {
            let len = next_cluster_len(&soup[offset..]);
            assert!(len > 0, "no progress at offset {offset} of {soup:x?}");
            assert!(len <= soup.len() - offset);
            offset += len;
            seen += 1;
            assert!(seen <= soup.len());
        }
        assert_eq!(offset, soup.len());
    }
}

#[test]
fn clusters_iterator() {
    let got: Vec<&str> = clusters("Hello!\r\nBeep 🧑‍🌾").collect();
    assert_eq!(
        got,
        &[
            "H", "e", "l", "l", "o", "!", "\r\n", "B", "e", "e", "p", " ", "🧑‍🌾"
        ]
    );
}

#[test]
fn clusters_iterator_carries_flags_across_clusters() {
    // Four regional indicators form two flags; the parity carried in
    // the iterator's state is what keeps the third and fourth paired.
    let got: Vec<&str> = clusters("\u{1F1E6}\u{1F1E7}\u{1F1E8}\u{1F1E9}").collect();
    assert_eq!(got, &["\u{1F1E6}\u{1F1E7}", "\u{1F1E8}\u{1F1E9}"]);

    let got: Vec<&str> = clusters("\u{1F1E6}\u{1F1E7}\u{1F1E6}").collect();
    assert_eq!(got, &["\u{1F1E6}\u{1F1E7}", "\u{1F1E6}"]);
}

#[test]
fn clusters_of_empty_string() {
    assert_eq!(clusters("").count(), 0);
}

#[test]
fn clusters_roundtrip() {
    let text = "née 한국어 🇦🇺🇦🇹 👩🏼‍🚀!";
    let got: Vec<&str> = clusters(text).collect();
    // subslices reassemble into the original text
    assert_eq!(got.concat(), text);
    // and every yielded cluster is non-empty
    assert!(got.iter().all(|c| !c.is_empty()));
}
