use fast_image_resize::{images::Image, FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::{
    DynamicImage, GrayImage, ImageBuffer, ImageDecoder, ImageError, ImageReader, Luma, Rgb,
    RgbImage,
};
use std::num::NonZeroU32;
use std::path::Path;

use super::classify::GrayF32Image;
use super::SoilError;

/// Both images are stretched to this square before analysis
pub const ANALYSIS_SIZE: u32 = 500;

/// Image buffers derived from one soil photograph
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// Resized color image
    pub color: RgbImage,
    /// Grayscale of `color`, normalized to `[0, 1]`
    pub gray: GrayF32Image,
}

/// Load a photograph, resize it to `size`x`size` and derive the normalized grayscale buffer
pub fn preprocess_image(path: &Path, size: u32) -> Result<PreparedImage, SoilError> {
    let img = load_image(path)?;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    let color = resize_image(&img, size, size)?;
    let gray = normalize(&to_grayscale(&color));

    Ok(PreparedImage { color, gray })
}

/// Decode an image file into RGB8, upright according to its EXIF orientation
pub fn load_image(path: &Path) -> Result<RgbImage, SoilError> {
    if !path.is_file() {
        return Err(SoilError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let read_error = |source: std::io::Error| SoilError::ImageRead {
        path: path.to_path_buf(),
        source,
    };
    let mut decoder = ImageReader::open(path)
        .map_err(read_error)?
        .with_guessed_format()
        .map_err(read_error)?
        .into_decoder()
        .map_err(|e| image_error(path, e))?;

    let orientation = decoder.orientation().map_err(|e| image_error(path, e))?;
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| image_error(path, e))?;
    img.apply_orientation(orientation);

    Ok(img.to_rgb8())
}

/// I/O failures while decoding are read errors; everything else is a decode error
fn image_error(path: &Path, error: ImageError) -> SoilError {
    match error {
        ImageError::IoError(source) => SoilError::ImageRead {
            path: path.to_path_buf(),
            source,
        },
        source => SoilError::ImageDecode {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Resize to exact dimensions with bilinear convolution; aspect ratio is not kept
pub fn resize_image(img: &RgbImage, width: u32, height: u32) -> Result<RgbImage, SoilError> {
    let (src_width, src_height) = img.dimensions();

    if src_width == width && src_height == height {
        return Ok(img.clone());
    }

    let non_zero = |value: u32, what: &str| {
        NonZeroU32::new(value).ok_or_else(|| SoilError::Resize(format!("{} is zero", what)))
    };
    let src_width_nz = non_zero(src_width, "Source width")?;
    let src_height_nz = non_zero(src_height, "Source height")?;
    let dst_width_nz = non_zero(width, "Target width")?;
    let dst_height_nz = non_zero(height, "Target height")?;

    let src_image = Image::from_vec_u8(
        src_width_nz.get(),
        src_height_nz.get(),
        img.as_raw().clone(),
        fast_image_resize::PixelType::U8x3,
    )
    .map_err(|e| SoilError::Resize(e.to_string()))?;

    let mut dst_image = Image::new(
        dst_width_nz.get(),
        dst_height_nz.get(),
        fast_image_resize::PixelType::U8x3,
    );

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| SoilError::Resize(e.to_string()))?;

    ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, dst_image.buffer().to_vec())
        .ok_or_else(|| SoilError::Resize("Resized buffer has unexpected length".to_string()))
}

// BT.601 weights in 14-bit fixed point; they sum to 1 << 14
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// BT.601 luma in 14-bit fixed point, rounded half up
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        let weighted = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
        Luma([((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8])
    })
}

/// Scale 8-bit gray levels into `[0, 1]`
pub fn normalize(gray: &GrayImage) -> GrayF32Image {
    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([gray.get_pixel(x, y)[0] as f32 / 255.0])
    })
}
