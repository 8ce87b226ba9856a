//! Board rendering.
//!
//! - `geometry`: square number to pixel box on the zig-zag grid
//! - `layout`: arranging several tokens on one square
//! - `compositor`: decoding the background, drawing tokens, encoding

pub mod geometry;
pub mod layout;
pub mod compositor;

pub use geometry::{cell_of, coordinate_of, BoundingBox, BOARD_SIZE, CELL_SIZE, GRID_SIDE};
pub use layout::{grid_side, stack_layout, Placement, StackGrid, TOKEN_AREA, TOKEN_MARGIN};
pub use compositor::{token_boxes, ImageFormat, RenderError, RenderOptions, Renderer, TokenBox, TokenStyle};
