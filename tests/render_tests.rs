//! Rendering tests: token placement, stacking and image output.

use std::io::Cursor;
use std::sync::Arc;

use image::{Rgb, RgbImage};
use snakes_ladders::core::{BoardDefinition, GameOptions, GameState, PlayerId, COLORS};
use snakes_ladders::render::{
    cell_of, token_boxes, ImageFormat, RenderError, RenderOptions, Renderer, TokenStyle, BOARD_SIZE,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn white_png() -> Vec<u8> {
    let canvas = RgbImage::from_pixel(BOARD_SIZE, BOARD_SIZE, WHITE);
    let mut out = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

fn game_with_background() -> GameState {
    let board = BoardDefinition::new("white").with_background(white_png());
    GameState::new(Arc::new(board), GameOptions::default())
}

fn png_renderer() -> Renderer {
    Renderer::new(RenderOptions {
        format: ImageFormat::Png,
        style: TokenStyle::Filled,
    })
}

#[test]
fn test_players_off_board_are_not_drawn() {
    let mut game = game_with_background();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.add_player(PlayerId::new(2), "b").unwrap();
    assert!(token_boxes(&game).is_empty());

    let canvas = png_renderer().render_image(&game).unwrap();
    assert!(canvas.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_single_token_drawn_in_its_cell() {
    let mut game = game_with_background();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.move_player(PlayerId::new(1), 1, true).unwrap();

    let boxes = token_boxes(&game);
    assert_eq!(boxes.len(), 1);
    let token = boxes[0];
    assert_eq!(token.square, 1);
    assert_eq!(token.bounds.corners(), ((15, 735), (65, 785)));
    assert!(cell_of(1).contains(&token.bounds));

    let canvas = png_renderer().render_image(&game).unwrap();
    assert_eq!(canvas.get_pixel(40, 760), &Rgb(COLORS[0].rgb));
    assert_eq!(canvas.get_pixel(2, 722), &WHITE);
}

#[test]
fn test_shared_square_tokens_are_disjoint() {
    let mut game = game_with_background();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.add_player(PlayerId::new(2), "b").unwrap();
    game.move_player(PlayerId::new(1), 37, true).unwrap();
    game.move_player(PlayerId::new(2), 37, true).unwrap();

    let boxes = token_boxes(&game);
    assert_eq!(boxes.len(), 2);
    assert!(!boxes[0].bounds.intersects(&boxes[1].bounds));
    assert_eq!(boxes[0].bounds.width(), 25);
    for token in &boxes {
        assert!(cell_of(37).contains(&token.bounds));
    }
}

#[test]
fn test_many_tokens_on_one_square_never_overlap() {
    let mut game = game_with_background();
    for i in 0..12 {
        game.add_player(PlayerId::new(i), format!("p{}", i)).unwrap();
        game.move_player(PlayerId::new(i), 50, false).unwrap();
    }

    let boxes = token_boxes(&game);
    assert_eq!(boxes.len(), 12);
    for (i, a) in boxes.iter().enumerate() {
        assert!(cell_of(50).contains(&a.bounds));
        for b in &boxes[i + 1..] {
            assert!(!a.bounds.intersects(&b.bounds));
        }
    }
}

#[test]
fn test_sixth_player_drawn_as_square() {
    let mut game = game_with_background();
    for i in 0..6 {
        game.add_player(PlayerId::new(i), format!("p{}", i)).unwrap();
    }
    // only the sixth joiner enters the board
    game.move_player(PlayerId::new(5), 100, false).unwrap();

    let canvas = png_renderer().render_image(&game).unwrap();
    let token = token_boxes(&game)[0];
    // a square fills its corners, a circle would not
    assert_eq!(canvas.get_pixel(token.bounds.x0, token.bounds.y0), &Rgb(COLORS[0].rgb));
}

#[test]
fn test_background_is_never_mutated() {
    let mut game = game_with_background();
    let original = game.board().background().unwrap().to_vec();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.move_player(PlayerId::new(1), 10, true).unwrap();

    let renderer = png_renderer();
    let first = renderer.render(&game).unwrap();
    game.move_player(PlayerId::new(1), 5, true).unwrap();
    let second = renderer.render(&game).unwrap();

    assert_eq!(game.board().background().unwrap(), &original[..]);
    assert_ne!(first, second);

    // only the new square is coloured in the second render
    let decoded = image::load_from_memory(&second).unwrap().to_rgb8();
    let old_center = (cell_of(10).x0 + 40, cell_of(10).y0 + 40);
    assert_eq!(decoded.get_pixel(old_center.0, old_center.1), &WHITE);
}

#[test]
fn test_jpeg_output_decodes() {
    let mut game = game_with_background();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.move_player(PlayerId::new(1), 42, true).unwrap();

    let bytes = Renderer::default().render(&game).unwrap();
    let format = image::guess_format(&bytes).unwrap();
    assert_eq!(format, image::ImageFormat::Jpeg);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), BOARD_SIZE);
    assert_eq!(decoded.height(), BOARD_SIZE);
}

#[test]
fn test_outline_style_leaves_center() {
    let mut game = game_with_background();
    game.add_player(PlayerId::new(1), "a").unwrap();
    game.move_player(PlayerId::new(1), 1, true).unwrap();

    let renderer = Renderer::new(RenderOptions {
        format: ImageFormat::Png,
        style: TokenStyle::Outline { width: 5 },
    });
    let canvas = renderer.render_image(&game).unwrap();
    // token box is (15,735)-(65,785); its center stays background
    assert_eq!(canvas.get_pixel(40, 760), &WHITE);
    assert_eq!(canvas.get_pixel(17, 760), &Rgb(COLORS[0].rgb));
}

#[test]
fn test_missing_background() {
    let board = BoardDefinition::new("bare");
    let game = GameState::new(Arc::new(board), GameOptions::default());
    match Renderer::default().render(&game) {
        Err(RenderError::NoBackground(name)) => assert_eq!(name, "bare"),
        other => panic!("expected NoBackground, got {:?}", other.map(|b| b.len())),
    }
}

#[test]
fn test_undecodable_background() {
    let board = BoardDefinition::new("junk").with_background(vec![0u8, 1, 2, 3]);
    let game = GameState::new(Arc::new(board), GameOptions::default());
    assert!(matches!(Renderer::default().render(&game), Err(RenderError::Decode(_))));
}
