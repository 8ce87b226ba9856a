//! Drawing player tokens onto a board background.
//!
//! Every render decodes the board's original background afresh, so the
//! shared `BoardDefinition` is never modified. Rendering is CPU-bound; an
//! adapter can run it on a worker thread against a cloned `GameState`.

use std::io::Cursor;

use image::{DynamicImage, Rgb, RgbImage};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::geometry::{coordinate_of, BoundingBox};
use super::layout::stack_layout;
use crate::core::{GameState, Shape, Square, VisualIdentity, FINAL_SQUARE};

/// Encoded output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
}

impl ImageFormat {
    fn encoder_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

/// How a token is painted inside its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum TokenStyle {
    #[default]
    Filled,
    /// Only a border `width` pixels thick.
    Outline { width: u32 },
}

/// Renderer settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default)]
    pub style: TokenStyle,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("board '{0}' has no background image")]
    NoBackground(String),
    #[error("failed to decode background: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode board image: {0}")]
    Encode(#[source] image::ImageError),
}

/// A token ready to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenBox {
    pub square: Square,
    pub identity: VisualIdentity,
    pub bounds: BoundingBox,
}

/// Compute where every on-board token goes.
///
/// Players at position `0` are skipped. Tokens sharing a square are laid out
/// with `stack_layout` in turn order.
#[must_use]
pub fn token_boxes(game: &GameState) -> Vec<TokenBox> {
    let mut by_square: FxHashMap<Square, SmallVec<[VisualIdentity; 4]>> = FxHashMap::default();
    for player in game.players() {
        let position = player.position();
        if position == 0 || position > FINAL_SQUARE {
            continue;
        }
        by_square.entry(position).or_default().push(player.identity());
    }

    let mut squares: Vec<_> = by_square.into_iter().collect();
    squares.sort_unstable_by_key(|(square, _)| *square);

    let mut boxes = Vec::with_capacity(game.len());
    for (square, identities) in squares {
        let grid = stack_layout(identities);
        for placement in grid.placements() {
            boxes.push(TokenBox {
                square,
                identity: *placement.token,
                bounds: coordinate_of(square, placement.size, placement.x_offset, placement.size, placement.y_offset),
            });
        }
    }
    boxes
}

/// Board image compositor.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the game and encode it.
    pub fn render(&self, game: &GameState) -> Result<Vec<u8>, RenderError> {
        let canvas = self.render_image(game)?;

        let mut out = Vec::new();
        DynamicImage::ImageRgb8(canvas)
            .write_to(&mut Cursor::new(&mut out), self.options.format.encoder_format())
            .map_err(RenderError::Encode)?;
        Ok(out)
    }

    /// Render the game to a flattened RGB image without encoding it.
    pub fn render_image(&self, game: &GameState) -> Result<RgbImage, RenderError> {
        let board = game.board();
        let background = board
            .background()
            .ok_or_else(|| RenderError::NoBackground(board.name().to_string()))?;
        let mut canvas = image::load_from_memory(background)
            .map_err(RenderError::Decode)?
            .to_rgb8();

        let boxes = token_boxes(game);
        for token in &boxes {
            let color = Rgb(token.identity.color().rgb);
            match token.identity.shape() {
                Shape::Circle => draw_ellipse(&mut canvas, &token.bounds, color, self.options.style),
                Shape::Square => draw_rect(&mut canvas, &token.bounds, color, self.options.style),
            }
        }

        log::debug!("rendered {} tokens on '{}'", boxes.len(), board.name());
        Ok(canvas)
    }
}

/// Clip `bounds` to the canvas.
fn clip(canvas: &RgbImage, bounds: &BoundingBox) -> (u32, u32, u32, u32) {
    let (w, h) = canvas.dimensions();
    (bounds.x0.min(w), bounds.y0.min(h), bounds.x1.min(w), bounds.y1.min(h))
}

fn draw_rect(canvas: &mut RgbImage, bounds: &BoundingBox, color: Rgb<u8>, style: TokenStyle) {
    let (x0, y0, x1, y1) = clip(canvas, bounds);
    let border = match style {
        TokenStyle::Filled => u32::MAX,
        TokenStyle::Outline { width } => width,
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let edge = (x - bounds.x0)
                .min(bounds.x1 - 1 - x)
                .min(y - bounds.y0)
                .min(bounds.y1 - 1 - y);
            if edge < border {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn draw_ellipse(canvas: &mut RgbImage, bounds: &BoundingBox, color: Rgb<u8>, style: TokenStyle) {
    let (x0, y0, x1, y1) = clip(canvas, bounds);
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let cx = bounds.x0 as f32 + rx;
    let cy = bounds.y0 as f32 + ry;

    let inner = match style {
        TokenStyle::Filled => None,
        TokenStyle::Outline { width } => {
            let w = width as f32;
            (rx > w && ry > w).then(|| (rx - w, ry - w))
        }
    };

    let inside = |x: u32, y: u32, rx: f32, ry: f32| {
        let dx = (x as f32 + 0.5 - cx) / rx;
        let dy = (y as f32 + 0.5 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    };

    for y in y0..y1 {
        for x in x0..x1 {
            if !inside(x, y, rx, ry) {
                continue;
            }
            if let Some((irx, iry)) = inner {
                if inside(x, y, irx, iry) {
                    continue;
                }
            }
            canvas.put_pixel(x, y, color);
        }
    }
}
