//! Tile artwork loading, grid rendering and PNG export

use crate::io::configuration::MAX_TILE_PIXEL_SIZE;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{Rotation, TileCatalog};
use image::{ImageError, ImageReader, RgbaImage, imageops};
use std::path::Path;

/// Decode one square image per tile, in catalog order
///
/// Relative tile identities are resolved against `base_dir`. The format is
/// detected from the file contents, not its extension. Artwork whose
/// side differs from `tile_size` is rescaled with nearest-neighbor sampling.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero or oversized `tile_size`,
/// `ImageLoad` if a file cannot be decoded and `InvalidTileArtwork` if an
/// image is not square
pub fn load_tile_artwork(
    catalog: &TileCatalog,
    base_dir: &Path,
    tile_size: u32,
) -> Result<Vec<RgbaImage>> {
    validate_tile_size(tile_size)?;

    catalog
        .iter()
        .map(|tile| {
            let path = base_dir.join(tile.id());
            let artwork = ImageReader::open(&path)
                .and_then(ImageReader::with_guessed_format)
                .map_err(ImageError::IoError)
                .and_then(ImageReader::decode)
                .map_err(|e| GenerationError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();
            fit_artwork(tile.id(), artwork, tile_size)
        })
        .collect()
}

/// Check an image is square and scale it to `tile_size`
///
/// # Errors
///
/// Returns `InvalidTileArtwork` if the image is not square or empty
pub fn fit_artwork(tile: &str, artwork: RgbaImage, tile_size: u32) -> Result<RgbaImage> {
    let (width, height) = artwork.dimensions();
    if width != height || width == 0 {
        return Err(GenerationError::InvalidTileArtwork {
            tile: tile.to_string(),
            reason: format!("artwork is {width}x{height}, expected a non-empty square"),
        });
    }

    if width == tile_size {
        Ok(artwork)
    } else {
        Ok(imageops::resize(
            &artwork,
            tile_size,
            tile_size,
            imageops::FilterType::Nearest,
        ))
    }
}

/// Turn artwork to match a rotation step
///
/// Each step is a quarter turn counter-clockwise, so that step 1 brings the
/// tile's right edge to the top just as the edge-code shift does.
pub fn rotate_artwork(artwork: &RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation.steps() {
        0 => artwork.clone(),
        1 => imageops::rotate270(artwork),
        2 => imageops::rotate180(artwork),
        _ => imageops::rotate90(artwork),
    }
}

/// Composite a fully resolved grid into one image
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid has unresolved cells or the tile
/// size is invalid, and `InvalidTileIndex` if a placement refers to a tile
/// with no artwork
pub fn render_grid(grid: &Grid, artwork: &[RgbaImage], tile_size: u32) -> Result<RgbaImage> {
    validate_tile_size(tile_size)?;

    if !grid.is_complete() {
        return Err(invalid_parameter(
            "grid",
            &format!("{}/{} cells", grid.resolved_count(), grid.width() * grid.height()),
            &"every cell must be resolved before rendering",
        ));
    }

    let width = pixel_extent("width", grid.width(), tile_size)?;
    let height = pixel_extent("height", grid.height(), tile_size)?;
    let mut canvas = RgbaImage::new(width, height);

    for (x, y, placement) in grid.placements() {
        let source = artwork
            .get(placement.tile)
            .ok_or(GenerationError::InvalidTileIndex {
                index: placement.tile,
                max_tiles: artwork.len(),
            })?;
        let rotated = rotate_artwork(source, placement.rotation);
        imageops::replace(
            &mut canvas,
            &rotated,
            x as i64 * i64::from(tile_size),
            y as i64 * i64::from(tile_size),
        );
    }

    Ok(canvas)
}

/// Save a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if the image cannot be written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

fn validate_tile_size(tile_size: u32) -> Result<()> {
    if tile_size == 0 || tile_size > MAX_TILE_PIXEL_SIZE {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must be between 1 and {MAX_TILE_PIXEL_SIZE}"),
        ));
    }
    Ok(())
}

fn pixel_extent(parameter: &'static str, cells: usize, tile_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|c| c.checked_mul(tile_size))
        .ok_or_else(|| {
            invalid_parameter(parameter, &cells, &"rendered image would be too large")
        })
}
