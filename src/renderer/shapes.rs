//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Generate vertices for a filled disk
pub fn disk(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    gradient_disk(center, radius, color, color, segments)
}

/// Generate vertices for a disk whose color blends from center to rim
pub fn gradient_disk(
    center: Vec2,
    radius: f32,
    center_color: [f32; 4],
    rim_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to rim
        vertices.push(Vertex::new(center, center_color));
        vertices.push(Vertex::new(center + radius * Vec2::from_angle(theta1), rim_color));
        vertices.push(Vertex::new(center + radius * Vec2::from_angle(theta2), rim_color));
    }

    vertices
}

/// Generate vertices for an annulus whose color blends from inner to outer edge
pub fn gradient_ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = center + inner_radius * Vec2::from_angle(theta1);
        let outer1 = center + outer_radius * Vec2::from_angle(theta1);
        let inner2 = center + inner_radius * Vec2::from_angle(theta2);
        let outer2 = center + outer_radius * Vec2::from_angle(theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1, inner_color));
        vertices.push(Vertex::new(outer1, outer_color));
        vertices.push(Vertex::new(inner2, inner_color));

        vertices.push(Vertex::new(inner2, inner_color));
        vertices.push(Vertex::new(outer1, outer_color));
        vertices.push(Vertex::new(outer2, outer_color));
    }

    vertices
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min, color),
        Vertex::new(Vec2::new(max.x, min.y), color),
        Vertex::new(max, color),
        Vertex::new(min, color),
        Vertex::new(max, color),
        Vertex::new(Vec2::new(min.x, max.y), color),
    ]
}

/// Generate vertices for a rectangular frame stroked along its outline
///
/// The stroke straddles the rectangle edge, like a canvas strokeRect. Side
/// bars stop short of the corners so no region is filled twice.
pub fn frame(min: Vec2, max: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(24);

    vertices.extend(quad(
        Vec2::new(min.x - half, min.y - half),
        Vec2::new(max.x + half, min.y + half),
        color,
    ));
    vertices.extend(quad(
        Vec2::new(min.x - half, max.y - half),
        Vec2::new(max.x + half, max.y + half),
        color,
    ));
    vertices.extend(quad(
        Vec2::new(min.x - half, min.y + half),
        Vec2::new(min.x + half, max.y - half),
        color,
    ));
    vertices.extend(quad(
        Vec2::new(max.x - half, min.y + half),
        Vec2::new(max.x + half, max.y - half),
        color,
    ));

    vertices
}
