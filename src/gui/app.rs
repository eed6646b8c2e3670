use iced::{Element, Task, Theme};

use crate::core::{store::BriefStore, tagline::TaglineClient};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, submit_brief::SubmitBriefScreen},
};

pub struct BrieflyApp {
    state: AppState,
    screen: ScreenData,
}

impl BrieflyApp {
    fn new(store: BriefStore, tagline: TaglineClient) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState { store, tagline },
                screen: ScreenData::SubmitBrief(SubmitBriefScreen::default()),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Briefly - Project Brief Submission".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen_message)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

/// Run the window until the user closes it.
pub fn run(store: BriefStore, tagline: TaglineClient) -> iced::Result {
    iced::application(
        move || BrieflyApp::new(store.clone(), tagline.clone()),
        BrieflyApp::update,
        BrieflyApp::view,
    )
    .title(BrieflyApp::title)
    .theme(BrieflyApp::theme)
    .run()
}
