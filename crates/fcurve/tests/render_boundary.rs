#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::{path::PathBuf, process::Command};

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use image::{DynamicImage, GenericImageView, Rgba};
use tempfile::tempdir;

fn read_image(path: &PathBuf) -> DynamicImage {
    image::open(path).expect("image decodes")
}

fn rgba_eq(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0 == b.0
}

#[allow(deprecated)]
fn run_render(output: &PathBuf, order: u32, size: u32, fg: &str) -> Assert {
    let mut cmd = Command::cargo_bin("fcurve").expect("binary exists");
    cmd.arg("render")
        .arg("-o")
        .arg(order.to_string())
        .arg("-s")
        .arg(size.to_string())
        .arg("--fg")
        .arg(fg)
        .arg(output);
    cmd.assert()
}

#[allow(deprecated)]
fn run_info(order: u32, size: u32) -> Assert {
    let mut cmd = Command::cargo_bin("fcurve").expect("binary exists");
    cmd.arg("info")
        .arg("-o")
        .arg(order.to_string())
        .arg("-s")
        .arg(size.to_string());
    cmd.assert()
}

#[test]
fn order_one_renders_the_u_motif() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("u.png");

    // Size 120 with the default margin puts the curve frame at (10,10)-(110,110),
    // so the order-1 motif runs along x/y = 35 and 85.
    run_render(&output, 1, 120, "ff0000").success();

    let img = read_image(&output);
    assert_eq!(img.width(), 120);
    assert_eq!(img.height(), 120);

    let red = Rgba([0xff, 0x00, 0x00, 0xff]);
    let white = Rgba([0xff, 0xff, 0xff, 0xff]);
    assert!(rgba_eq(img.get_pixel(35, 60), red), "left arm drawn");
    assert!(rgba_eq(img.get_pixel(60, 35), red), "top bar drawn");
    assert!(rgba_eq(img.get_pixel(85, 60), red), "right arm drawn");
    assert!(rgba_eq(img.get_pixel(60, 60), white), "interior untouched");
}

#[test]
fn higher_orders_fill_the_frame() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("dense.png");

    run_render(&output, 5, 256, "000000").success();

    let img = read_image(&output);
    // An order-5 curve visits every region of the frame; sample a few interior
    // points and expect at least one stroke hit nearby on each scanline.
    let black = Rgba([0x00, 0x00, 0x00, 0xff]);
    for y in [40u32, 128, 210] {
        let hit = (10..246).any(|x| rgba_eq(img.get_pixel(x, y), black));
        assert!(hit, "no stroke found on scanline y={y}");
    }
}

#[test]
fn order_zero_is_rejected() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("never.png");
    run_render(&output, 0, 256, "ff0000").failure();
    assert!(!output.exists(), "no output written on failure");
}

#[test]
fn oversized_orders_are_rejected() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("never.png");
    // A 64px image cannot host an order-8 curve: quadrants degenerate first.
    run_render(&output, 8, 64, "ff0000").failure();
}

#[test]
fn bad_colors_are_rejected() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("never.png");
    run_render(&output, 3, 256, "notacolor").failure();
}

#[test]
#[allow(deprecated)]
fn anim_writes_a_gif() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("curve.gif");

    let mut cmd = Command::cargo_bin("fcurve").expect("binary exists");
    cmd.arg("anim")
        .arg("-o")
        .arg("2")
        .arg("-s")
        .arg("64")
        .arg("--frames")
        .arg("4")
        .arg(&output);
    cmd.assert().success();

    let bytes = std::fs::read(&output).expect("gif written");
    assert_eq!(&bytes[..6], b"GIF89a");
}

#[test]
fn info_prints_count_and_bounds() {
    let assert = run_info(3, 256).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("63 segments"), "{stdout}");
    assert!(stdout.contains("bounds:"), "{stdout}");
}
