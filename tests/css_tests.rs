use std::collections::HashSet;

use vizpal_rs::palettes::css::{css_stylesheet, to_css_variables};
use vizpal_rs::palettes::registry::{get_palette, PALETTE_NAMES};

#[test]
fn okabe_ito_variables() {
	let vars = to_css_variables("okabe_ito", None).unwrap();
	let pal = get_palette("okabe_ito").unwrap();

	assert_eq!(vars.len(), 8);

	for (i, (identifier, color)) in vars.iter().enumerate() {
		assert_eq!(*identifier, format!("--okabe-ito-{}", i + 1));
		assert_eq!(*color, pal.colors[i].color.to_string());
	}

	let unique = vars.iter().map(|(k, _)| k).collect::<HashSet<_>>();
	assert_eq!(unique.len(), vars.len());
}

#[test]
fn variables_for_every_palette() {
	for name in PALETTE_NAMES {
		println!("Testing CSS variables for {name}…");

		let pal = get_palette(name).unwrap();
		let vars = to_css_variables(name, None).unwrap();

		assert_eq!(vars.len(), pal.len());
		assert_eq!(
			vars.iter().map(|(_, v)| v.clone()).collect::<Vec<String>>(),
			pal.hex_colors()
		);
	}
}

#[test]
fn custom_prefix() {
	let vars = to_css_variables("paul_tol_vibrant", Some("chart")).unwrap();

	assert_eq!(vars[0].0, "--chart-1");
	assert_eq!(vars[0].1, "#EE7733");
	assert_eq!(vars[6].0, "--chart-7");
}

#[test]
#[should_panic(expected = "InvalidCssPrefix { prefix: \"2-bad\" }")]
fn prefix_must_not_start_with_a_digit() {
	to_css_variables("okabe_ito", Some("2-bad")).unwrap();
}

#[test]
#[should_panic(expected = "InvalidCssPrefix { prefix: \"no spaces\" }")]
fn prefix_must_be_a_css_identifier() {
	css_stylesheet("okabe_ito", Some("no spaces")).unwrap();
}

#[test]
#[should_panic(expected = "UnknownPalette { name: \"pastelle\" }")]
fn unknown_palette() {
	to_css_variables("pastelle", None).unwrap();
}

#[test]
fn stylesheet_block() {
	let sheet = css_stylesheet("okabe_ito", None).unwrap();

	assert!(sheet.starts_with(":root {\n"));
	assert!(sheet.ends_with("}\n"));
	assert!(sheet.contains("  --okabe-ito-1: #E69F00;\n"));
	assert!(sheet.contains("  --okabe-ito-8: #000000;\n"));

	// one declaration per color plus the two block delimiter lines
	assert_eq!(sheet.lines().count(), 8 + 2);
}

#[test]
fn stylesheet_is_idempotent() {
	let first = css_stylesheet("colorbrewer_dark2", Some("brand")).unwrap();
	let second = css_stylesheet("colorbrewer_dark2", Some("brand")).unwrap();
	assert_eq!(first, second);
}
