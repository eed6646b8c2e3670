use crate::gui::{
    screens::{ScreenMessage, brief_list::BriefListScreen, submit_brief::SubmitBriefScreen},
    widgets::Tab,
};

#[derive(Debug, Clone)]
pub enum Message {
    SubmitBrief(ScreenMessage<SubmitBriefScreen>),
    BriefList(ScreenMessage<BriefListScreen>),
    ChangeScreen(Tab),
    ListLoaded(BriefListScreen),
}
