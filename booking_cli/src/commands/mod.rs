mod create;
mod date;
mod delete;
mod list;
mod mine;
mod show;
mod update;
mod vid;

pub use create::CreateCommand;
pub use date::DateCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use mine::MineCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;
pub use vid::VidCommand;

use booking_core::model::BookingKind;
use clap::ValueEnum;

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Normal,
    Training,
    Event,
    Exam,
}

impl From<KindArg> for BookingKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Normal => BookingKind::Normal,
            KindArg::Training => BookingKind::Training,
            KindArg::Event => BookingKind::Event,
            KindArg::Exam => BookingKind::Exam,
        }
    }
}
