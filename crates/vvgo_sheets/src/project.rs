//! Project records.

use crate::{Column, FromRow};
use serde::{Deserialize, Serialize};

/// A VVGO project as listed in the website data spreadsheet.
///
/// `name` is the unique key. Serialized field names match the spreadsheet's
/// column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    /// Unique slug, e.g. `10-hildas-healing`.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Whether parts have been released to the public.
    #[serde(rename = "Parts Released")]
    pub released: bool,
    /// Whether the project is finished and archived.
    pub archived: bool,
    /// Source material credits.
    pub sources: String,
    /// Composer credits.
    pub composers: String,
    /// Arranger credits.
    pub arrangers: String,
    /// Editor credits.
    pub editors: String,
    /// Transcriber credits.
    pub transcribers: String,
    /// Part preparer credits.
    pub preparers: String,
    /// Click track credits.
    #[serde(rename = "Clix By")]
    pub clix_by: String,
    /// Reviewer credits.
    pub reviewers: String,
    /// Lyricist credits.
    pub lyricists: String,
    /// Additional content credits.
    #[serde(rename = "Additional Content")]
    pub additional_content: String,
    /// Link to the reference track.
    #[serde(rename = "Reference Track")]
    pub reference_track: String,
    /// Link to the choir pronunciation guide.
    #[serde(rename = "Choir Pronunciation Guide")]
    pub choir_pronunciation_guide: String,
    /// Link to the premiere video.
    #[serde(rename = "Youtube Link")]
    pub youtube_link: String,
    /// Embeddable premiere video link.
    #[serde(rename = "Youtube Embed")]
    pub youtube_embed: String,
    /// Submission deadline as written in the sheet.
    #[serde(rename = "Submission Deadline")]
    pub submission_deadline: String,
    /// Where performers upload recordings.
    #[serde(rename = "Submission Link")]
    pub submission_link: String,
    /// Season the project belongs to.
    pub season: String,
    /// Banner image link.
    #[serde(rename = "Banner Link")]
    pub banner_link: String,
}

impl Project {
    /// Site-relative link to this project's parts page.
    ///
    /// ```
    /// use vvgo_sheets::Project;
    ///
    /// let project = Project { name: "10-hildas-healing".into(), ..Default::default() };
    /// assert_eq!(project.parts_page(), "/parts?project=10-hildas-healing");
    /// ```
    pub fn parts_page(&self) -> String {
        format!("/parts?project={}", urlencoding::encode(&self.name))
    }
}

type ProjectColumn = Column<Project>;

const PROJECT_COLUMNS: &[ProjectColumn] = &[
    ProjectColumn::text("Name", |p| &mut p.name),
    ProjectColumn::text("Title", |p| &mut p.title),
    ProjectColumn::flag("Parts Released", |p| &mut p.released),
    ProjectColumn::flag("Archived", |p| &mut p.archived),
    ProjectColumn::text("Sources", |p| &mut p.sources),
    ProjectColumn::text("Composers", |p| &mut p.composers),
    ProjectColumn::text("Arrangers", |p| &mut p.arrangers),
    ProjectColumn::text("Editors", |p| &mut p.editors),
    ProjectColumn::text("Transcribers", |p| &mut p.transcribers),
    ProjectColumn::text("Preparers", |p| &mut p.preparers),
    ProjectColumn::text("Clix By", |p| &mut p.clix_by),
    ProjectColumn::text("Reviewers", |p| &mut p.reviewers),
    ProjectColumn::text("Lyricists", |p| &mut p.lyricists),
    ProjectColumn::text("Additional Content", |p| &mut p.additional_content),
    ProjectColumn::text("Reference Track", |p| &mut p.reference_track),
    ProjectColumn::text("Choir Pronunciation Guide", |p| &mut p.choir_pronunciation_guide),
    ProjectColumn::text("Youtube Link", |p| &mut p.youtube_link),
    ProjectColumn::text("Youtube Embed", |p| &mut p.youtube_embed),
    ProjectColumn::text("Submission Deadline", |p| &mut p.submission_deadline),
    ProjectColumn::text("Submission Link", |p| &mut p.submission_link),
    ProjectColumn::text("Season", |p| &mut p.season),
    ProjectColumn::text("Banner Link", |p| &mut p.banner_link),
];

impl FromRow for Project {
    fn columns() -> &'static [Column<Self>] {
        PROJECT_COLUMNS
    }
}
