pub mod brief_list;
pub mod submit_brief;

use iced::{
    Element, Task,
    widget::{container, text},
};

use crate::gui::{AppState, Message, widgets::Tab};

#[derive(Debug)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

// Manual impl: a derive would also demand `S: Clone`, which the
// submit screen cannot provide (text_editor content is not Clone).
impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(message) => {
                ScreenMessage::ScreenMessage(message.clone())
            }
            ScreenMessage::ParentMessage(message) => {
                ScreenMessage::ParentMessage(message.clone())
            }
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug)]
pub enum ScreenData {
    SubmitBrief(submit_brief::SubmitBriefScreen),
    BriefList(brief_list::BriefListScreen),
    Loading,
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::SubmitBrief(screen) => screen
                .view()
                .map(Message::SubmitBrief)
                .map(ScreenMessage::ScreenMessage),
            ScreenData::BriefList(screen) => screen
                .view()
                .map(Message::BriefList)
                .map(ScreenMessage::ScreenMessage),
            ScreenData::Loading => container(text("Loading briefs..."))
                .center_x(iced::Length::Fill)
                .center_y(iced::Length::Fill)
                .into(),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(Tab::Submit)) => {
                *x = ScreenData::SubmitBrief(submit_brief::SubmitBriefScreen::default());
                Task::none()
            }
            (x, Message::ChangeScreen(Tab::Submitted)) => {
                *x = ScreenData::Loading;
                let store = state.store.clone();
                Task::perform(
                    async move { brief_list::BriefListScreen::load(&store).await },
                    |screen| ScreenMessage::ScreenMessage(Message::ListLoaded(screen)),
                )
            }
            (x, Message::ListLoaded(screen)) => {
                *x = ScreenData::BriefList(screen);
                Task::none()
            }
            (ScreenData::SubmitBrief(page), Message::SubmitBrief(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::SubmitBrief)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    submit_brief::ParentMessage::SelectTab(tab) => Task::done(
                        ScreenMessage::ScreenMessage(Message::ChangeScreen(tab)),
                    ),
                },
            },
            (ScreenData::BriefList(page), Message::BriefList(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::BriefList)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    brief_list::ParentMessage::SelectTab(tab) => Task::done(
                        ScreenMessage::ScreenMessage(Message::ChangeScreen(tab)),
                    ),
                },
            },
            _ => Task::none(),
        }
    }
}
