use iced::{
    Color, Element, Theme, border,
    widget::{
        button, column, container,
        container::{Style, bordered_box},
        row, text,
    },
};

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Submit,
    Submitted,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Submit => "Submit Brief",
            Tab::Submitted => "Submitted Briefs",
        }
    }

    fn style(self, active: Tab) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // dim the active tab so it reads as selected
            if self == active {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

fn tab_item<'a, Message: Clone + 'a>(
    tab: Tab,
    active: Tab,
    on_select: &impl Fn(Tab) -> Message,
) -> Element<'a, Message> {
    let label = button(text(tab.label())).on_press_maybe((tab != active).then(|| on_select(tab)));
    container(label)
        .style(tab.style(active))
        .padding(4)
        .into()
}

/// Common frame of both views: the tab bar on top, the view content
/// below it.
pub fn layout<'a, Message: Clone + 'a>(
    active: Tab,
    on_select: impl Fn(Tab) -> Message,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let tab_bar = row![
        tab_item(Tab::Submit, active, &on_select),
        tab_item(Tab::Submitted, active, &on_select),
    ]
    .spacing(10);

    container(column![
        container(tab_bar).padding(10),
        container(content.into())
            .height(iced::Length::Fill)
            .padding(10),
    ])
    .center_x(iced::Length::Fill)
    .into()
}
