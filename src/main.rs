use arcade::prelude::*;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 800;

const GRAVITY: f32 = 0.5;
const JUMP_SPEED: f32 = -12.0;
const RUN_SPEED: f32 = 4.0;

fn main() -> Result<()> {
    let config = EngineConfig::new(WIDTH, HEIGHT, "Arcade").with_background(colors::SKY_BLUE);
    let mut engine = Engine::init(config)?;

    let mut player = ColorSprite::new(190.0, 750.0, 20.0, 20.0, colors::RED);
    let mut coin = ColorSprite::new(60.0, 600.0, 12.0, 12.0, colors::YELLOW);
    let mut score = 0u32;
    let mut started = false;

    while engine.update() {
        if engine.key_pressed(Key::Escape) {
            engine.set_running(false);
        }

        let dt = engine.delta_time();
        let scale = frame_scale(dt);

        if engine.key_pressed_once(Key::Space) {
            started = true;
            // only jump from the floor
            if player.y >= (HEIGHT as f32 - player.height) - 0.5 {
                player.vy = JUMP_SPEED;
            }
        }
        player.vx = match (engine.key_pressed(Key::Left), engine.key_pressed(Key::Right)) {
            (true, false) => -RUN_SPEED * scale,
            (false, true) => RUN_SPEED * scale,
            _ => 0.0,
        };
        player.move_with_gravity(GRAVITY * scale, HEIGHT as f32);
        player.x = player.x.clamp(0.0, WIDTH as f32 - player.width);

        if check_collision(&player, &coin) {
            score += 1;
            coin.x = ((coin.x as u32 + 137) % (WIDTH - 12)) as f32;
            coin.y = 500.0 + ((score * 53) % 250) as f32;
        }

        engine.render(&[SpriteRef::from(&coin), SpriteRef::from(&player)])?;

        engine.render_text(&format!("SCORE {score}"), 8, 8, colors::BLACK);
        if !started {
            engine.render_text_centered_blink("PRESS SPACE", 300, colors::WHITE, 30);
        }

        engine.sleep(1);
    }

    engine.quit();
    Ok(())
}
