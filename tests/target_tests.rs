use serde_json::Value;

use vizpal_rs::palettes::ramps::{continuous_colormap, diverging_colormap, CONTINUOUS_COLORMAPS, DIVERGING_COLORMAPS};
use vizpal_rs::palettes::registry::{get_palette, PALETTE_NAMES};
use vizpal_rs::palettes::targets::{format_for_target, Target, TargetPalette};

const SEQUENCE_TARGETS: [Target; 3] = [Target::Matplotlib, Target::Seaborn, Target::Plotly];

#[test]
fn sequence_targets_keep_order() {
	for name in PALETTE_NAMES {
		let expected = get_palette(name).unwrap().hex_colors();

		for target in SEQUENCE_TARGETS {
			println!("Testing {name} for {target}…");

			let formatted = format_for_target(name, target).unwrap();
			assert_eq!(formatted, TargetPalette::Sequence(expected.clone()));
		}
	}
}

#[test]
fn sequence_serializes_as_plain_array() {
	let formatted = format_for_target("okabe_ito", Target::Matplotlib).unwrap();
	let json = serde_json::to_value(&formatted).unwrap();

	let Value::Array(colors) = json else { panic!("expected a JSON array") };
	assert_eq!(colors.len(), 8);
	assert_eq!(colors[0], Value::String("#E69F00".to_string()));
}

#[test]
fn vega_lite_scale_object() {
	let formatted = format_for_target("paul_tol_muted", Target::VegaLite).unwrap();
	assert_eq!(formatted.hex_colors(), get_palette("paul_tol_muted").unwrap().hex_colors().as_slice());

	let json = serde_json::to_value(&formatted).unwrap();
	let range = json.get("range").expect("scale object must have a range");
	assert_eq!(range.as_array().unwrap().len(), 9);
	assert_eq!(range[0], Value::String("#CC6677".to_string()));
}

#[test]
fn formatting_is_idempotent() {
	let first = format_for_target("colorbrewer_dark2", Target::VegaLite).unwrap();
	let second = format_for_target("colorbrewer_dark2", Target::VegaLite).unwrap();
	assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "UnknownPalette { name: \"not_a_real_palette\" }")]
fn unknown_palette() {
	format_for_target("not_a_real_palette", Target::Plotly).unwrap();
}

#[test]
fn colormap_names_validate() {
	assert_eq!(continuous_colormap("viridis").unwrap(), "viridis");
	assert_eq!(diverging_colormap("BrBG").unwrap(), "BrBG");

	for name in CONTINUOUS_COLORMAPS {
		assert_eq!(continuous_colormap(name).unwrap(), name);
	}
	for name in DIVERGING_COLORMAPS {
		assert_eq!(diverging_colormap(name).unwrap(), name);
	}
}

#[test]
#[should_panic(expected = "UnknownColormap { name: \"jet\" }")]
fn unknown_colormap() {
	continuous_colormap("jet").unwrap();
}

#[test]
#[should_panic(expected = "UnknownColormap { name: \"viridis\" }")]
fn diverging_rejects_sequential_names() {
	diverging_colormap("viridis").unwrap();
}
