use padwire::codes::n3ds;
use padwire::{ControlsConfig, FactoryDirectory, GamepadEvent, InputManager};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut directory = FactoryDirectory::new();
    let input = Arc::new(InputManager::init(&mut directory));

    // Emulation side: one device per configured slot.
    let config = ControlsConfig::default();
    let a = config
        .button_binding("button_a")
        .and_then(|d| directory.create_button(&d))
        .expect("button_a is a default slot");
    let pad = config
        .analog_binding("circle_pad")
        .and_then(|d| directory.create_analog(&d))
        .expect("circle_pad is a default slot");

    // UI side: a fake touch overlay feeding events.
    let ui = {
        let input = Arc::clone(&input);
        thread::spawn(move || {
            for step in 0..8 {
                input.dispatch(GamepadEvent::button(n3ds::BUTTON_A, step % 2 == 0));
                let t = step as f32 / 8.0;
                input.dispatch(GamepadEvent::from_frontend_axis(n3ds::CIRCLEPAD, t, t));
                thread::sleep(Duration::from_millis(16));
            }
        })
    };

    for frame in 0..10 {
        let (x, y) = pad.status();
        println!("frame {frame}: A={} circle_pad=({x:.2}, {y:.2})", a.status());
        thread::sleep(Duration::from_millis(16));
    }
    ui.join().expect("ui thread");

    println!("{}", input.snapshot().to_json().expect("snapshot json"));

    drop(a);
    drop(pad);
    if let Ok(input) = Arc::try_unwrap(input) {
        input.shutdown(&mut directory);
    }
}
