//! End-to-end flow tests covering the decode -> paint -> encode pipeline.

mod common;

use impasto::error::StylizeError;
use impasto::stylize::{self, StylizeOptions};
use painterly::{Painter, Rgba, StrokeStyle};
use pretty_assertions::assert_eq;

#[test]
fn test_paint_flow_from_file_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    common::write_png(&input, &common::gradient_pixels(40, 30), 40, 30);

    let options = StylizeOptions {
        style: StrokeStyle::bristle(),
        seed: Some(21),
        ..StylizeOptions::default()
    };
    let png_bytes = stylize::stylize_file(&input, &options).unwrap();
    common::assert_png(&png_bytes);

    // Small sources keep their resolution, and the surface stays opaque.
    let (raw, width, height) = common::decode_png(&png_bytes);
    assert_eq!((width, height), (40, 30));
    assert!(
        raw.chunks_exact(4).all(|px| px[3] == 255),
        "painting should be fully opaque"
    );
}

#[test]
fn test_large_source_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.png");
    common::write_png(&input, &common::gradient_pixels(1600, 400), 1600, 400);

    // Low density keeps this fast; the cap is what's under test.
    let options = StylizeOptions {
        style: StrokeStyle::flat_rect(),
        density: 0.05,
        seed: Some(5),
        ..StylizeOptions::default()
    };
    let png_bytes = stylize::stylize_file(&input, &options).unwrap();

    let (_, width, height) = common::decode_png(&png_bytes);
    assert_eq!((width, height), (768, 192), "1600x400 should scale to fit 768");
}

#[test]
fn test_same_seed_reproduces_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    common::write_png(&input, &common::gradient_pixels(32, 32), 32, 32);

    let options = StylizeOptions {
        style: StrokeStyle::dab(),
        seed: Some(77),
        ..StylizeOptions::default()
    };
    let first = stylize::stylize_file(&input, &options).unwrap();
    let second = stylize::stylize_file(&input, &options).unwrap();
    assert!(
        first == second,
        "seeded runs should produce byte-identical PNGs"
    );
}

#[test]
fn test_styles_render_distinct_paintings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    common::write_png(&input, &common::gradient_pixels(32, 32), 32, 32);

    let mut outputs = Vec::new();
    for style in [
        StrokeStyle::bristle(),
        StrokeStyle::dab(),
        StrokeStyle::flat_rect(),
    ] {
        let options = StylizeOptions {
            style,
            seed: Some(13),
            ..StylizeOptions::default()
        };
        outputs.push(stylize::stylize_file(&input, &options).unwrap());
    }

    assert!(outputs[0] != outputs[1], "bristle and dab should differ");
    assert!(outputs[1] != outputs[2], "dab and flat-rect should differ");
    assert!(outputs[0] != outputs[2], "bristle and flat-rect should differ");
}

#[test]
fn test_app_boundary_matches_core_pipeline() {
    // The file/PNG layers must not perturb what the core renders.
    let pixels = common::solid_pixels(Rgba::opaque(180, 90, 30), 24, 18);
    let options = StylizeOptions {
        style: StrokeStyle::flat_rect(),
        seed: Some(8),
        ..StylizeOptions::default()
    };

    let png_bytes = stylize::stylize_pixels(&pixels, 24, 18, &options).unwrap();
    let (raw, width, height) = common::decode_png(&png_bytes);

    let painting = Painter::new(StrokeStyle::flat_rect())
        .seed(8)
        .paint(&pixels, 24, 18);
    assert_eq!((width as usize, height as usize), (painting.width(), painting.height()));
    assert!(
        raw.as_slice() == painting.as_rgba_bytes(),
        "PNG round trip should reproduce the core's surface exactly"
    );
}

#[test]
fn test_missing_input_reports_io_error() {
    let options = StylizeOptions::default();
    let error = stylize::stylize_file(std::path::Path::new("/no/such/input.png"), &options)
        .unwrap_err();
    match error {
        StylizeError::Io(_) => {}
        other => panic!("Expected Io variant, got {other:?}"),
    }
}

#[test]
fn test_invalid_density_rejected_via_file_flow() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("source.png");
    common::write_png(&input, &common::gradient_pixels(8, 8), 8, 8);

    let options = StylizeOptions {
        density: -1.0,
        ..StylizeOptions::default()
    };
    let error = stylize::stylize_file(&input, &options).unwrap_err();
    match error {
        StylizeError::InvalidParameter(msg) => {
            assert!(msg.contains("density"), "message was: {msg}")
        }
        other => panic!("Expected InvalidParameter variant, got {other:?}"),
    }
}
