//! Property tests for code isolation and fan-out.

use padwire::{BindingDescriptor, InputManager};
use proptest::prelude::*;

fn descriptor(code: i32) -> BindingDescriptor {
    BindingDescriptor::parse(&padwire::generate_button_binding(code))
}

proptest! {
    #[test]
    fn press_reaches_exactly_the_bound_code(
        codes in prop::collection::vec(-50i32..50, 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let input = InputManager::new();
        let handles: Vec<_> = codes
            .iter()
            .map(|c| input.button_handler().create(&descriptor(*c)))
            .collect();

        let target = codes[pick.index(codes.len())];
        prop_assert!(input.button_handler().press_key(target));

        for h in &handles {
            prop_assert_eq!(h.poll(), h.code() == target);
        }
    }

    #[test]
    fn stick_moves_only_its_code(
        code in -20i32..20,
        other in -20i32..20,
        x in -1.0f32..=1.0,
        y in -1.0f32..=1.0,
    ) {
        prop_assume!(code != other);
        let input = InputManager::new();
        let a = input.analog_handler().create(&descriptor(code));
        let b = input.analog_handler().create(&descriptor(other));

        input.analog_handler().move_joystick(code, x, y);
        prop_assert_eq!(a.poll(), (x, y));
        prop_assert_eq!(b.poll(), (0.0, 0.0));
    }

    #[test]
    fn dropped_handles_leave_no_registration(count in 0usize..32, keep in 0usize..32) {
        let input = InputManager::new();
        let mut handles: Vec<_> = (0..count)
            .map(|i| input.button_handler().create(&descriptor(i as i32 % 4)))
            .collect();
        handles.truncate(keep.min(count));

        prop_assert_eq!(input.button_handler().registry().len(), handles.len());
        drop(handles);
        prop_assert!(input.button_handler().registry().is_empty());
    }

    #[test]
    fn descriptor_text_round_trips(key in "[a-z$:,]{1,8}", value in "[a-z0-9$:,]{0,8}") {
        let d = BindingDescriptor::new().with(&key, &value);
        prop_assert_eq!(BindingDescriptor::parse(&d.to_string()), d);
    }
}
