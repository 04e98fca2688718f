use std::io::Cursor;

use super::*;

const WATER: [u8; 4] = [0, 0, WATER_BLUE, 255];
const LOW_LAND: [u8; 4] = [190, 220, 140, 255];
const HIGH_LAND: [u8; 4] = [230, 230, 200, 255];

fn png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| image::Rgba(f(x, y)));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn generate(bytes: &[u8], remove_small: bool) -> MapGenResult<GenerationResult> {
    RasterTerrainEngine::new().generate(&GeneratorArgs {
        image_bytes: bytes,
        remove_small,
        name: "fixture",
    })
}

#[test]
fn left_half_land_right_half_water() {
    let bytes = png(8, 4, |x, _| if x < 4 { LOW_LAND } else { WATER });
    let res = generate(&bytes, false).unwrap();

    assert_eq!(
        res.map,
        Geometry {
            width: 8,
            height: 4,
            num_land_tiles: 16
        }
    );
    assert_eq!(
        res.mini_map,
        Geometry {
            width: 4,
            height: 2,
            num_land_tiles: 4
        }
    );
    assert_eq!(res.map_bytes.len(), 32);
    assert_eq!(res.mini_map_bytes.len(), 8);
}

#[test]
fn packed_bits_mark_land_water_and_shore() {
    let bytes = png(4, 1, |x, _| if x < 2 { HIGH_LAND } else { WATER });
    let res = generate(&bytes, false).unwrap();
    let m = &res.map_bytes;

    // interior land, magnitude (200 - 140) / 2 = 30
    assert_eq!(m[0], LAND_BIT | 30);
    assert_eq!(m[1], LAND_BIT | SHORELINE_BIT | 30);
    assert_eq!(m[2], OCEAN_BIT | SHORELINE_BIT);
    assert_eq!(m[3], OCEAN_BIT);
}

#[test]
fn transparent_pixels_are_water() {
    let bytes = png(2, 2, |_, _| [190, 220, 150, 0]);
    let res = generate(&bytes, true).unwrap();
    assert_eq!(res.map.num_land_tiles, 0);
    assert!(res.map_bytes.iter().all(|b| *b == OCEAN_BIT));
}

#[test]
fn odd_dimensions_round_minimap_up() {
    let bytes = png(5, 3, |_, _| LOW_LAND);
    let res = generate(&bytes, false).unwrap();
    assert_eq!((res.mini_map.width, res.mini_map.height), (3, 2));
    assert_eq!(res.mini_map.num_land_tiles, 6);
}

#[test]
fn thumbnail_is_webp() {
    let bytes = png(16, 16, |x, y| if (x + y) % 3 == 0 { WATER } else { LOW_LAND });
    let res = generate(&bytes, false).unwrap();
    assert_eq!(&res.thumbnail_bytes[0..4], b"RIFF");
    assert_eq!(&res.thumbnail_bytes[8..12], b"WEBP");
    let thumb = image::load_from_memory(&res.thumbnail_bytes).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (4, 4));
}

#[test]
fn output_is_deterministic() {
    let bytes = png(12, 9, |x, y| if x * y % 5 == 0 { WATER } else { HIGH_LAND });
    let a = generate(&bytes, true).unwrap();
    let b = generate(&bytes, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn garbage_bytes_are_a_generation_error() {
    let err = generate(b"not an image", false).unwrap_err();
    match err {
        MapGenError::Generation { name, message } => {
            assert_eq!(name, "fixture");
            assert!(message.contains("decode image"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
