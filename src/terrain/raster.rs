use crate::foundation::error::{MapGenError, MapGenResult};
use crate::terrain::{GenerationResult, GeneratorArgs, Geometry, TerrainEngine};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, RgbaImage};

/// Blue channel value painted for water in source images.
pub const WATER_BLUE: u8 = 106;
/// Pixels more transparent than this are water.
pub const MIN_OPAQUE_ALPHA: u8 = 20;

pub const LAND_BIT: u8 = 1 << 7;
pub const SHORELINE_BIT: u8 = 1 << 6;
pub const OCEAN_BIT: u8 = 1 << 5;
pub const MAGNITUDE_MASK: u8 = 0x1f;

const MAGNITUDE_BASE_BLUE: i32 = 140;
const THUMBNAIL_DIVISOR: u32 = 4;

/// Reference [`TerrainEngine`] classifying pixels by colour.
///
/// One byte per tile: bit 7 land, bit 6 shoreline, bit 5 ocean, bits 0..5 elevation magnitude.
/// The minimap is half resolution and the thumbnail a lossless WebP at a quarter of the source
/// size. Small-island removal is not performed; `remove_small` is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterTerrainEngine;

impl RasterTerrainEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TerrainEngine for RasterTerrainEngine {
    #[tracing::instrument(skip(self, args), fields(map = args.name, remove_small = args.remove_small))]
    fn generate(&self, args: &GeneratorArgs<'_>) -> MapGenResult<GenerationResult> {
        let rgba = image::load_from_memory(args.image_bytes)
            .map_err(|e| MapGenError::generation(args.name, format!("decode image: {e}")))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(MapGenError::generation(
                args.name,
                format!("image has zero extent ({width}x{height})"),
            ));
        }
        if args.remove_small {
            tracing::debug!("small-island removal requested; raster engine keeps all land");
        }

        let grid = TerrainGrid::classify(&rgba);
        let mini = grid.downscale();

        let (map_bytes, map_land) = grid.pack();
        let (mini_map_bytes, mini_land) = mini.pack();
        let thumbnail_bytes = grid
            .thumbnail()
            .map_err(|e| MapGenError::generation(args.name, format!("encode thumbnail: {e}")))?;

        Ok(GenerationResult {
            map_bytes,
            mini_map_bytes,
            thumbnail_bytes,
            map: Geometry {
                width: grid.width,
                height: grid.height,
                num_land_tiles: map_land,
            },
            mini_map: Geometry {
                width: mini.width,
                height: mini.height,
                num_land_tiles: mini_land,
            },
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tile {
    land: bool,
    magnitude: u8,
}

impl Tile {
    const WATER: Tile = Tile {
        land: false,
        magnitude: 0,
    };

    fn from_rgba(px: [u8; 4]) -> Self {
        let [_, _, blue, alpha] = px;
        if alpha < MIN_OPAQUE_ALPHA || blue == WATER_BLUE {
            return Self::WATER;
        }
        let magnitude = ((i32::from(blue) - MAGNITUDE_BASE_BLUE) / 2).clamp(0, 31) as u8;
        Self {
            land: true,
            magnitude,
        }
    }
}

#[derive(Clone, Debug)]
struct TerrainGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>, // row-major
}

impl TerrainGrid {
    fn classify(rgba: &RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let tiles = rgba.pixels().map(|p| Tile::from_rgba(p.0)).collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    fn at(&self, x: u32, y: u32) -> Tile {
        self.tiles[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Half resolution (rounded up), sampling the top-left tile of each 2x2 block.
    fn downscale(&self) -> Self {
        let width = self.width.div_ceil(2);
        let height = self.height.div_ceil(2);
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(self.at(x * 2, y * 2));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// A tile is shoreline when any 4-neighbour has the opposite class.
    fn is_shoreline(&self, x: u32, y: u32) -> bool {
        let land = self.at(x, y).land;
        let mut neighbours = [None; 4];
        if x > 0 {
            neighbours[0] = Some((x - 1, y));
        }
        if x + 1 < self.width {
            neighbours[1] = Some((x + 1, y));
        }
        if y > 0 {
            neighbours[2] = Some((x, y - 1));
        }
        if y + 1 < self.height {
            neighbours[3] = Some((x, y + 1));
        }
        neighbours
            .into_iter()
            .flatten()
            .any(|(nx, ny)| self.at(nx, ny).land != land)
    }

    fn packed_byte(&self, x: u32, y: u32) -> u8 {
        let tile = self.at(x, y);
        let mut b = if tile.land {
            LAND_BIT | (tile.magnitude & MAGNITUDE_MASK)
        } else {
            OCEAN_BIT
        };
        if self.is_shoreline(x, y) {
            b |= SHORELINE_BIT;
        }
        b
    }

    fn pack(&self) -> (Vec<u8>, u64) {
        let mut out = Vec::with_capacity(self.tiles.len());
        let mut land = 0u64;
        for y in 0..self.height {
            for x in 0..self.width {
                let b = self.packed_byte(x, y);
                if b & LAND_BIT != 0 {
                    land += 1;
                }
                out.push(b);
            }
        }
        (out, land)
    }

    fn render(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let tile = self.at(x, y);
            let shore = self.is_shoreline(x, y);
            let rgb = match (tile.land, shore) {
                (false, true) => [100, 143, 255],
                (false, false) => [70, 132, 180],
                (true, true) => [204, 203, 158],
                (true, false) => land_colour(tile.magnitude),
            };
            image::Rgba([rgb[0], rgb[1], rgb[2], 255])
        })
    }

    fn thumbnail(&self) -> image::ImageResult<Vec<u8>> {
        let full = self.render();
        let w = (self.width / THUMBNAIL_DIVISOR).max(1);
        let h = (self.height / THUMBNAIL_DIVISOR).max(1);
        let small = image::imageops::resize(&full, w, h, FilterType::Triangle);

        let mut out = Vec::new();
        WebPEncoder::new_lossless(&mut out).encode(
            small.as_raw(),
            w,
            h,
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}

fn land_colour(magnitude: u8) -> [u8; 3] {
    let m = magnitude.min(31);
    match m {
        0..10 => [190, 220 - m * 2, 138],
        10..20 => [200 + m * 2, 183 + m * 2, 138 + m * 2],
        _ => [230 + m / 2, 230 + m / 2, 230 + m / 2],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terrain/raster.rs"]
mod tests;
