//! 3D visualization of a tiling using kiss3d.

use std::collections::HashMap;

use kiss3d::prelude::*;

use tetracube::{Grid, PieceId};

/// Fixed palette, cycled by piece identity so colors stay stable across renders.
fn piece_color(id: PieceId) -> Color {
    const PALETTE: [(f32, f32, f32); 12] = [
        (1.0, 0.2, 0.2), // red
        (0.2, 1.0, 0.2), // green
        (0.2, 0.2, 1.0), // blue
        (1.0, 1.0, 0.2), // yellow
        (1.0, 0.2, 1.0), // magenta
        (0.2, 1.0, 1.0), // cyan
        (1.0, 0.6, 0.2), // orange
        (0.6, 0.2, 1.0), // violet
        (0.6, 1.0, 0.4), // lime
        (1.0, 0.5, 0.7), // pink
        (0.4, 0.7, 1.0), // sky
        (0.8, 0.8, 0.8), // grey
    ];
    let (r, g, b) = PALETTE[id.0 as usize % PALETTE.len()];
    Color::new(r, g, b, 1.0)
}

/// Represents a rendered cube in the 3D scene.
struct RenderedCube {
    node: SceneNode3d,
    /// The cube's position when not exploded.
    base_position: Vec3,
    piece: PieceId,
}

/// Builds the scene for a grid, centered at the origin.
///
/// Returns the rendered cubes and each piece's centroid (in world units) for
/// the explosion animation.
fn build_scene(scene: &mut SceneNode3d, grid: &Grid) -> (Vec<RenderedCube>, HashMap<PieceId, Vec3>) {
    /// Slightly smaller than a cell so the seams between pieces show.
    const CUBE_SIZE: f32 = 0.9;

    let center_offset = -(grid.side() as f32 - 1.0) / 2.0;
    let to_world = |(x, y, z): (i32, i32, i32)| {
        Vec3::new(
            x as f32 + center_offset,
            y as f32 + center_offset,
            z as f32 + center_offset,
        )
    };

    let mut piece_centroids = HashMap::new();
    let mut rendered_cubes = Vec::new();

    for piece in grid.pieces() {
        let cells = piece.absolute_cells();
        let position_sum = cells
            .iter()
            .map(|&cell| to_world(cell))
            .fold(Vec3::ZERO, |acc, pos| acc + pos);
        piece_centroids.insert(piece.id, position_sum / cells.len() as f32);

        for cell in cells {
            let base_position = to_world(cell);
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(piece_color(piece.id))
                .set_position(base_position);
            rendered_cubes.push(RenderedCube {
                node,
                base_position,
                piece: piece.id,
            });
        }
    }

    (rendered_cubes, piece_centroids)
}

/// Displays a tiling in an interactive 3D viewer.
pub fn display(grid: Grid) {
    pollster::block_on(display_async(grid));
}

async fn display_async(grid: Grid) {
    if grid.is_empty() {
        println!("No pieces to display");
        return;
    }

    let mut window = Window::new(&format!(
        "{} pieces - [Up/Down] explode, [R] reset",
        grid.piece_count()
    ))
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(grid.side() as f32 * 2.5);

    let mut scene = SceneNode3d::empty();
    let light_distance = grid.side() as f32 * 1.5;
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(light_distance, light_distance, light_distance));

    let (mut rendered_cubes, piece_centroids) = build_scene(&mut scene, &grid);

    // 0.0 = compact, higher = further apart
    let mut explosion_amount: f32 = 0.0;
    const EXPLOSION_SPEED: f32 = 0.05;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Up => explosion_amount += EXPLOSION_SPEED,
                        Key::Down => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::R => explosion_amount = 0.0,
                        _ => {}
                    }
                }
            }
        }

        for cube in &mut rendered_cubes {
            let direction = piece_centroids
                .get(&cube.piece)
                .map_or(Vec3::ZERO, |centroid| centroid.normalize_or_zero());
            cube.node
                .set_position(cube.base_position + direction * explosion_amount * 2.0);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
