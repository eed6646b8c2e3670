use iced::{
    Element, Task,
    widget::{button, column, container, row, scrollable, text},
};
use rfd::AsyncFileDialog;

use crate::{
    core::store::{Brief, BriefRepository, BriefStore},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{Tab, layout},
    },
};

/// The listing view: one expandable panel per stored brief, a
/// save-a-copy action per attached file, and the global clear.
#[derive(Debug, Clone)]
pub struct BriefListScreen {
    briefs: Vec<BriefEntry>,
    expanded: Option<usize>,
    load_error: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Clone)]
struct BriefEntry {
    brief: Brief,
    files: Vec<FileEntry>,
}

#[derive(Debug, Clone)]
struct FileEntry {
    name: String,
    /// Checked against the upload directory at load time; a missing
    /// file renders a "(missing)" marker instead of a save action.
    present: bool,
}

#[derive(Debug, Clone)]
pub enum BriefListMessage {
    ToggleExpand(usize),
    SaveCopy { brief: usize, file: usize },
    CopyFinished(Option<Result<String, String>>),
    ClearAll,
    Cleared(Result<(), String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SelectTab(Tab),
}

impl BriefListScreen {
    /// Load every stored brief and check which referenced uploads are
    /// still present. A malformed data file becomes an inline error
    /// instead of a rendered list.
    pub async fn load(store: &BriefStore) -> Self {
        let briefs = match store.load().await {
            Ok(briefs) => briefs,
            Err(err) => {
                return Self {
                    briefs: Vec::new(),
                    expanded: None,
                    load_error: Some(format!("{err:#}")),
                    status: None,
                };
            }
        };

        let mut entries = Vec::with_capacity(briefs.len());
        for brief in briefs {
            let mut files = Vec::with_capacity(brief.files.len());
            for name in &brief.files {
                let present = store.has_upload(name).await.unwrap_or(false);
                files.push(FileEntry {
                    name: name.clone(),
                    present,
                });
            }
            entries.push(BriefEntry { brief, files });
        }

        Self {
            briefs: entries,
            expanded: None,
            load_error: None,
            status: None,
        }
    }

    fn brief_panel(&self, index: usize, entry: &BriefEntry) -> Element<'_, ScreenMessage<Self>> {
        let header = button(text(format!("{}. {}", index + 1, entry.brief.project_name)))
            .on_press(ScreenMessage::ScreenMessage(BriefListMessage::ToggleExpand(
                index,
            )))
            .width(iced::Length::Fill);

        if self.expanded != Some(index) {
            return header.into();
        }

        let links = if entry.brief.links.trim().is_empty() {
            "No links provided"
        } else {
            entry.brief.links.as_str()
        };

        let mut details = column![
            text(format!("Deadline: {}", entry.brief.deadline)),
            text(format!("Links: {links}")),
            text("Uploaded Files:"),
        ]
        .spacing(5);

        if entry.files.is_empty() {
            details = details.push(text("No files uploaded."));
        } else {
            for (file_index, file) in entry.files.iter().enumerate() {
                if file.present {
                    details = details.push(
                        row![
                            text(file.name.clone()),
                            button("Save a copy").on_press(ScreenMessage::ScreenMessage(
                                BriefListMessage::SaveCopy {
                                    brief: index,
                                    file: file_index,
                                }
                            )),
                        ]
                        .spacing(10),
                    );
                } else {
                    details = details.push(text(format!("{} (missing)", file.name)));
                }
            }
        }

        details = details.push(text(format!("Tagline: {}", entry.brief.tagline)));

        column![
            header,
            container(details)
                .style(container::bordered_box)
                .padding(10)
        ]
        .spacing(5)
        .into()
    }
}

impl Screen for BriefListScreen {
    type Message = BriefListMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            button("Clear Submitted Briefs")
                .on_press(ScreenMessage::ScreenMessage(BriefListMessage::ClearAll)),
        ]
        .spacing(10);

        if let Some(err) = &self.load_error {
            content = content.push(text(format!("Failed to load briefs: {err}")));
        } else if self.briefs.is_empty() {
            content = content.push(text("No briefs submitted yet."));
        } else {
            for (index, entry) in self.briefs.iter().enumerate() {
                content = content.push(self.brief_panel(index, entry));
            }
        }

        if let Some(status) = &self.status {
            content = content.push(text(status.clone()));
        }

        layout(
            Tab::Submitted,
            |tab| ScreenMessage::ParentMessage(ParentMessage::SelectTab(tab)),
            scrollable(content.padding(20)),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            BriefListMessage::ToggleExpand(index) => {
                self.expanded = if self.expanded == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Task::none()
            }
            BriefListMessage::SaveCopy { brief, file } => {
                let Some(name) = self
                    .briefs
                    .get(brief)
                    .and_then(|entry| entry.files.get(file))
                    .map(|file| file.name.clone())
                else {
                    return Task::none();
                };
                let store = state.store.clone();
                Task::perform(
                    async move {
                        let handle = AsyncFileDialog::new()
                            .set_title("Save a copy of the uploaded file")
                            .set_file_name(&name)
                            .save_file()
                            .await?;
                        let result = async {
                            let bytes = store
                                .read_upload(&name)
                                .await
                                .map_err(|err| err.to_string())?
                                .ok_or_else(|| {
                                    format!("{name} is missing from the upload directory")
                                })?;
                            tokio::fs::write(handle.path(), &bytes)
                                .await
                                .map_err(|err| err.to_string())?;
                            Ok(format!("Saved a copy of {name}"))
                        }
                        .await;
                        Some(result)
                    },
                    |result| ScreenMessage::ScreenMessage(BriefListMessage::CopyFinished(result)),
                )
            }
            BriefListMessage::CopyFinished(result) => {
                if let Some(result) = result {
                    self.status = Some(result.unwrap_or_else(|err| err));
                }
                Task::none()
            }
            BriefListMessage::ClearAll => {
                let store = state.store.clone();
                Task::perform(
                    async move { store.clear().await.map_err(|err| err.to_string()) },
                    |result| ScreenMessage::ScreenMessage(BriefListMessage::Cleared(result)),
                )
            }
            BriefListMessage::Cleared(result) => {
                match result {
                    Ok(()) => {
                        self.briefs.clear();
                        self.expanded = None;
                        self.load_error = None;
                        self.status = Some("All briefs cleared.".to_string());
                    }
                    Err(err) => {
                        self.status = Some(err);
                    }
                }
                Task::none()
            }
        }
    }
}
