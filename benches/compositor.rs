use arcade::render::compositor::{blit, compose, fill_rect};
use arcade::render::Surface;
use arcade::{colors, ColorSprite, ImageSprite, SpriteRef};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SURFACE_WIDTH: u32 = 400;
const SURFACE_HEIGHT: u32 = 800;

fn create_surface() -> Surface {
    Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT, colors::SKY_BLUE)
}

/// Checkerboard of opaque and fully transparent texels.
fn checker_texels(size: u32) -> Vec<u32> {
    (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            if (x / 4 + y / 4) % 2 == 0 {
                0xFF00_FF00
            } else {
                0x0000_0000
            }
        })
        .collect()
}

fn benchmark_single_sprite(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_sprite");

    for size in [16u32, 64, 256] {
        let texels = checker_texels(size);

        group.bench_with_input(BenchmarkId::new("fill", size), &size, |b, &size| {
            let mut surface = create_surface();
            b.iter(|| {
                fill_rect(
                    &mut surface,
                    black_box(50),
                    black_box(50),
                    size as i32,
                    size as i32,
                    colors::RED,
                );
            });
        });

        group.bench_with_input(BenchmarkId::new("blit", size), &texels, |b, texels| {
            let mut surface = create_surface();
            b.iter(|| {
                blit(
                    &mut surface,
                    black_box(50),
                    black_box(50),
                    size as i32,
                    size as i32,
                    black_box(texels),
                    size as usize,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    // A column of platforms plus a grid of textured coins
    let platforms: Vec<ColorSprite> = (0..20)
        .map(|i| {
            let x = (i % 4) as f32 * 100.0;
            ColorSprite::new(x, i as f32 * 40.0, 80.0, 10.0, colors::GREEN)
        })
        .collect();
    let coins: Vec<ImageSprite> = (0..100)
        .filter_map(|i| {
            let x = (i % 10) as f32 * 40.0;
            let y = (i / 10) as f32 * 80.0;
            ImageSprite::from_pixels(x, y, 16, 16, checker_texels(16)).ok()
        })
        .collect();

    let mut sprites: Vec<SpriteRef> = platforms.iter().map(SpriteRef::from).collect();
    sprites.extend(coins.iter().map(SpriteRef::from));

    group.bench_function("compose_120_sprites", |b| {
        let mut surface = create_surface();
        b.iter(|| compose(&mut surface, black_box(&sprites)));
    });

    group.bench_function("clear_only", |b| {
        let mut surface = create_surface();
        let empty: [SpriteRef; 0] = [];
        b.iter(|| compose(&mut surface, black_box(&empty[..])));
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_sprite, benchmark_full_frame);
criterion_main!(benches);
