use std::path::PathBuf;

use iced::{
    Element, Task,
    widget::{button, column, row, scrollable, text, text_editor, text_input},
};
use rfd::AsyncFileDialog;

use crate::{
    core::{
        store::{Brief, NewBrief},
        submission,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{Tab, layout},
    },
};

/// The submission form: name, deadline, links, attachments.
#[derive(Debug, Default)]
pub struct SubmitBriefScreen {
    project_name: String,
    deadline: String,
    links: text_editor::Content,
    attachments: Vec<PathBuf>,
    status: Option<Result<Brief, String>>,
}

#[derive(Debug, Clone)]
pub enum SubmitBriefMessage {
    ProjectNameChanged(String),
    DeadlineChanged(String),
    LinksEdited(text_editor::Action),
    PickFiles,
    FilesPicked(Vec<PathBuf>),
    RemoveAttachment(usize),
    Submit,
    Finished(Result<Brief, String>),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SelectTab(Tab),
}

impl Screen for SubmitBriefScreen {
    type Message = SubmitBriefMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Submit a new project brief").size(24),
            text_input("Project Name", &self.project_name).on_input(|value| {
                ScreenMessage::ScreenMessage(SubmitBriefMessage::ProjectNameChanged(value))
            }),
            text_input("Deadline (YYYY-MM-DD)", &self.deadline).on_input(|value| {
                ScreenMessage::ScreenMessage(SubmitBriefMessage::DeadlineChanged(value))
            }),
            text("Links (paste URLs here)"),
            text_editor(&self.links).placeholder("https://...").on_action(
                |action| ScreenMessage::ScreenMessage(SubmitBriefMessage::LinksEdited(action))
            ),
            button("Attach Files")
                .on_press(ScreenMessage::ScreenMessage(SubmitBriefMessage::PickFiles)),
        ]
        .spacing(10);

        for (index, path) in self.attachments.iter().enumerate() {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            form = form.push(
                row![
                    text(name),
                    button("Remove").on_press(ScreenMessage::ScreenMessage(
                        SubmitBriefMessage::RemoveAttachment(index)
                    )),
                ]
                .spacing(10),
            );
        }

        form = form.push(
            button("Submit Brief").on_press(ScreenMessage::ScreenMessage(SubmitBriefMessage::Submit)),
        );

        match &self.status {
            Some(Ok(brief)) => {
                form = form.push(text("Brief submitted successfully!"));
                form = form.push(text(format!("AI-generated tagline: {}", brief.tagline)));
            }
            Some(Err(message)) => {
                form = form.push(text(message.clone()));
            }
            None => {}
        }

        layout(
            Tab::Submit,
            |tab| ScreenMessage::ParentMessage(ParentMessage::SelectTab(tab)),
            scrollable(form.padding(20)),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SubmitBriefMessage::ProjectNameChanged(value) => {
                self.project_name = value;
                Task::none()
            }
            SubmitBriefMessage::DeadlineChanged(value) => {
                self.deadline = value;
                Task::none()
            }
            SubmitBriefMessage::LinksEdited(action) => {
                self.links.perform(action);
                Task::none()
            }
            SubmitBriefMessage::PickFiles => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Attach files to this brief")
                    .pick_files(),
                |handles| match handles {
                    Some(handles) => {
                        ScreenMessage::ScreenMessage(SubmitBriefMessage::FilesPicked(
                            handles
                                .iter()
                                .map(|handle| handle.path().to_path_buf())
                                .collect(),
                        ))
                    }
                    None => ScreenMessage::ScreenMessage(SubmitBriefMessage::None),
                },
            ),
            SubmitBriefMessage::FilesPicked(paths) => {
                self.attachments.extend(paths);
                Task::none()
            }
            SubmitBriefMessage::RemoveAttachment(index) => {
                if index < self.attachments.len() {
                    self.attachments.remove(index);
                }
                Task::none()
            }
            SubmitBriefMessage::Submit => {
                if self.project_name.trim().is_empty() {
                    self.status = Some(Err("Project Name is required.".to_string()));
                    return Task::none();
                }
                let deadline = match submission::parse_deadline(&self.deadline, submission::today())
                {
                    Ok(deadline) => deadline,
                    Err(err) => {
                        self.status = Some(Err(err.to_string()));
                        return Task::none();
                    }
                };

                self.status = None;
                let new_brief = NewBrief {
                    project_name: self.project_name.clone(),
                    deadline,
                    links: self.links.text().trim_end().to_string(),
                    attachments: self.attachments.clone(),
                };
                let store = state.store.clone();
                let generator = state.tagline.clone();
                Task::perform(
                    async move {
                        submission::submit_brief(&store, &generator, new_brief)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(SubmitBriefMessage::Finished(result)),
                )
            }
            SubmitBriefMessage::Finished(result) => {
                if result.is_ok() {
                    self.project_name.clear();
                    self.deadline.clear();
                    self.links = text_editor::Content::new();
                    self.attachments.clear();
                }
                self.status = Some(result);
                Task::none()
            }
            SubmitBriefMessage::None => Task::none(),
        }
    }
}
