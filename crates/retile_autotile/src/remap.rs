//! Pixel remapping of classified sheets between layout families

use image::{imageops, RgbaImage};
use retile_core::{SheetError, SheetVariant, TileFormat};

use crate::tables;

/// Re-tile a classified sheet from one layout family to another
///
/// The sheet must already have been classified as `variant` under the
/// source family for the given `tile_size`. Identity conversions and
/// minimal strips come back byte-for-byte; standard blocks go through the
/// quadrant permutation tables, one block (animation frame) at a time, each
/// quadrant copied verbatim with no scaling or blending. Fails with
/// `UnsupportedConversion` when no table is registered for the pair.
pub fn remap(
    sheet: &RgbaImage,
    source: TileFormat,
    target: TileFormat,
    variant: SheetVariant,
    tile_size: u32,
) -> Result<RgbaImage, SheetError> {
    if source == target || variant == SheetVariant::MinimalStrip {
        return Ok(sheet.clone());
    }

    let Some(map) = tables::permutation(source, target) else {
        return Err(SheetError::UnsupportedConversion {
            from_format: source,
            target,
            variant,
        });
    };

    let half = tile_size / 2;
    let src_block_width = source.block_cols() * tile_size;
    let dst_block_width = target.block_cols() * tile_size;
    let dst_quad_cols = target.block_cols() * 2;
    let blocks = sheet.width() / src_block_width;

    let mut out = RgbaImage::new(blocks * dst_block_width, target.block_rows() * tile_size);
    for block in 0..blocks {
        let src_x = block * src_block_width;
        let dst_x = block * dst_block_width;
        for (index, quad) in map.iter().enumerate() {
            let [src_col, src_row] = *quad;
            let dst_col = index as u32 % dst_quad_cols;
            let dst_row = index as u32 / dst_quad_cols;
            let view = imageops::crop_imm(
                sheet,
                src_x + u32::from(src_col) * half,
                u32::from(src_row) * half,
                half,
                half,
            );
            imageops::replace(
                &mut out,
                &*view,
                i64::from(dst_x + dst_col * half),
                i64::from(dst_row * half),
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use retile_core::TILE_SIZE;

    const HALF: u32 = TILE_SIZE / 2;

    /// Build a sheet with one uniform colour per quadrant
    fn quadrant_sheet(width: u32, height: u32, color: impl Fn(u32, u32) -> Rgba<u8>) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| color(x / HALF, y / HALF))
    }

    fn quad_color(sheet: &RgbaImage, col: u32, row: u32) -> Rgba<u8> {
        *sheet.get_pixel(col * HALF, row * HALF)
    }

    /// Distinct, fully opaque colour per quadrant coordinate
    fn marker(col: u32, row: u32) -> Rgba<u8> {
        Rgba([(col * 17 + 3) as u8, (row * 23 + 5) as u8, (col * 7 + row) as u8, 255])
    }

    #[test]
    fn test_identity_conversion_is_byte_identical() {
        let sheet = quadrant_sheet(96, 128, marker);
        for format in TileFormat::ALL {
            let out = remap(&sheet, format, format, SheetVariant::StandardBlock, TILE_SIZE).unwrap();
            assert_eq!(out.as_raw(), sheet.as_raw());
        }
    }

    #[test]
    fn test_minimal_strip_passes_through_to_any_target() {
        let strip = quadrant_sheet(160, 32, marker);
        for target in TileFormat::ALL {
            let out = remap(
                &strip,
                TileFormat::Rmxp,
                target,
                SheetVariant::MinimalStrip,
                TILE_SIZE,
            )
            .unwrap();
            assert_eq!(out.as_raw(), strip.as_raw());
        }
    }

    #[test]
    fn test_xp_to_vx_selects_defining_quadrants() {
        let sheet = quadrant_sheet(96, 128, marker);
        let out = remap(
            &sheet,
            TileFormat::Rmxp,
            TileFormat::Rmvx,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();

        assert_eq!((out.width(), out.height()), (64, 96));
        // island
        assert_eq!(quad_color(&out, 0, 0), marker(0, 0));
        // inner corners sit right of the island in the A2 block
        assert_eq!(quad_color(&out, 2, 0), marker(4, 0));
        assert_eq!(quad_color(&out, 3, 1), marker(5, 1));
        // patch corners: outer quadrant rows of the XP 3x3 patch
        assert_eq!(quad_color(&out, 0, 2), marker(0, 2));
        assert_eq!(quad_color(&out, 3, 2), marker(5, 2));
        assert_eq!(quad_color(&out, 0, 5), marker(0, 7));
        assert_eq!(quad_color(&out, 3, 5), marker(5, 7));
    }

    #[test]
    fn test_vx_to_xp_expands_derived_quadrants() {
        let sheet = quadrant_sheet(64, 96, marker);
        let out = remap(
            &sheet,
            TileFormat::Rmvx,
            TileFormat::Rmxp,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();

        assert_eq!((out.width(), out.height()), (96, 128));
        // the unused XP tile mirrors the island
        assert_eq!(quad_color(&out, 2, 0), marker(0, 0));
        assert_eq!(quad_color(&out, 3, 1), marker(1, 1));
        // top edge alternates the two edge variants: a b a b between corners
        assert_eq!(quad_color(&out, 1, 2), marker(1, 2));
        assert_eq!(quad_color(&out, 2, 2), marker(2, 2));
        assert_eq!(quad_color(&out, 3, 2), marker(1, 2));
        assert_eq!(quad_color(&out, 4, 2), marker(2, 2));
        // patch interior tiles the 2x2 fill periodically
        assert_eq!(quad_color(&out, 1, 3), marker(1, 3));
        assert_eq!(quad_color(&out, 1, 5), marker(1, 3));
        assert_eq!(quad_color(&out, 2, 6), marker(2, 4));
        // bottom corners
        assert_eq!(quad_color(&out, 0, 7), marker(0, 5));
        assert_eq!(quad_color(&out, 5, 7), marker(3, 5));
    }

    #[test]
    fn test_vx_round_trip_through_xp_is_exact() {
        let original = quadrant_sheet(64, 96, marker);
        let expanded = remap(
            &original,
            TileFormat::Rmvx,
            TileFormat::Rmxp,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        let back = remap(
            &expanded,
            TileFormat::Rmxp,
            TileFormat::Rmvx,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        assert_eq!(back.as_raw(), original.as_raw());
    }

    #[test]
    fn test_canonical_xp_round_trip_through_vx_is_exact() {
        // A canonical XP sheet is one whose derived quadrants follow the
        // template, e.g. anything the expansion itself produces
        let canonical = remap(
            &quadrant_sheet(64, 96, marker),
            TileFormat::Rmvx,
            TileFormat::Rmxp,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();

        let selected = remap(
            &canonical,
            TileFormat::Rmxp,
            TileFormat::Rmvx,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        let restored = remap(
            &selected,
            TileFormat::Rmvx,
            TileFormat::Rmxp,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        assert_eq!(restored.as_raw(), canonical.as_raw());
    }

    #[test]
    fn test_mv_uses_the_same_tables_as_vx() {
        let sheet = quadrant_sheet(96, 128, marker);
        let to_vx = remap(
            &sheet,
            TileFormat::Rmxp,
            TileFormat::Rmvx,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        let to_mv = remap(
            &sheet,
            TileFormat::Rmxp,
            TileFormat::Rmmv,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();
        assert_eq!(to_mv.as_raw(), to_vx.as_raw());
    }

    #[test]
    fn test_animation_frames_convert_block_by_block() {
        // Two XP frames side by side; frame colours differ in the blue channel
        let sheet = RgbaImage::from_fn(192, 128, |x, y| {
            let block = x / 96;
            let m = marker((x % 96) / HALF, y / HALF);
            Rgba([m[0], m[1], 200 + block as u8, 255])
        });
        let out = remap(
            &sheet,
            TileFormat::Rmxp,
            TileFormat::Rmvx,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap();

        assert_eq!((out.width(), out.height()), (128, 96));
        // island of each frame keeps its frame's colour
        assert_eq!(quad_color(&out, 0, 0)[2], 200);
        assert_eq!(quad_color(&out, 4, 0)[2], 201);
    }

    #[test]
    fn test_unregistered_pair_is_rejected() {
        let sheet = quadrant_sheet(64, 96, marker);
        let err = remap(
            &sheet,
            TileFormat::Rmvx,
            TileFormat::Rmmv,
            SheetVariant::StandardBlock,
            TILE_SIZE,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SheetError::UnsupportedConversion {
                from_format: TileFormat::Rmvx,
                target: TileFormat::Rmmv,
                variant: SheetVariant::StandardBlock,
            }
        ));
    }
}
