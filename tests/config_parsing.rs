use exploder::lowlevel::{parse_int_pair, preprocess};
use exploder::{Config, ErrorKind, ExploderError};

const SAMPLE: &str = r#"
#textdomain tools
# Cutting layout for the grass transitions.
[mask]
    name=grass-n   # north edge
    image="hex-n.png"
    shift = 0 , -36
[/mask]

[part]
    name=grass-n
    pos=72,0
    description=_ "Grass, ""north"" edge"
[/part]
"#;

#[test]
fn sample_configuration_parses() {
    let conf = Config::parse(SAMPLE).unwrap();

    let mask = conf.children("mask").next().unwrap();
    assert_eq!(mask.get("name"), "grass-n");
    assert_eq!(mask.get("image"), "hex-n.png");
    assert_eq!(parse_int_pair(mask.get("shift")), Some((0, -36)));

    let part = conf.children("part").next().unwrap();
    assert_eq!(part.get("pos"), "72,0");
    assert_eq!(part.get("description"), "Grass, \"north\" edge");
    assert_eq!(
        part.attributes().map(|(k, _)| k).collect::<Vec<_>>(),
        ["name", "pos", "description"]
    );
}

#[test]
fn preprocess_keeps_line_numbers_for_errors() {
    let text = "# one\n# two\n[part]\nname=a\n[/mask]\n";
    assert_eq!(preprocess(text).lines().count(), 5);

    let err = Config::parse(text).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(err, ExploderError::Parse { line: 5, .. }));
}

#[test]
fn repeated_attribute_keeps_last_value() {
    let conf = Config::parse("[part]\nname=a\nname=b\n[/part]\n").unwrap();
    assert_eq!(conf.children("part").next().unwrap().get("name"), "b");
}

#[test]
fn stray_closing_tag_is_rejected() {
    let err = Config::parse("[/part]\n").unwrap_err();
    assert_eq!(
        err,
        ExploderError::Parse {
            line: 1,
            reason: "unexpected [/part]".into(),
        }
    );
}

#[test]
fn invalid_tag_names_are_rejected() {
    assert!(Config::parse("[ bad tag ]\n[/ bad tag ]\n").is_err());
    assert!(Config::parse("[]\n").is_err());
}

#[test]
fn byte_order_mark_is_ignored() {
    let conf = Config::parse("\u{feff}[mask]\nname=a\n[/mask]\n").unwrap();
    assert_eq!(conf.children("mask").next().unwrap().get("name"), "a");
}
