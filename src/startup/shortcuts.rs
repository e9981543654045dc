use bevy::prelude::*;
use bevy::app::AppExit;

use crate::systems::input::CurrentInput;

pub fn close_on_quit(
    input: Res<CurrentInput>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if input.0.quit {
        info!("quit requested");
        app_exit_events.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_requests(app: &mut App) -> usize {
        let events = app.world().resource::<Events<AppExit>>();
        events.get_cursor().read(events).count()
    }

    #[test]
    fn quit_input_requests_exit() {
        let mut app = App::new();
        app.add_event::<AppExit>();
        app.init_resource::<CurrentInput>();
        app.add_systems(Update, close_on_quit);

        app.update();
        assert_eq!(exit_requests(&mut app), 0);

        app.world_mut().resource_mut::<CurrentInput>().0.quit = true;
        app.update();
        assert_eq!(exit_requests(&mut app), 1);
    }
}
