use crate::commands::{
    CreateCommand, DateCommand, DeleteCommand, ListCommand, MineCommand, ShowCommand,
    UpdateCommand, VidCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for reserving ATC positions on the network.
#[derive(Parser)]
#[command(name = "atc-booking")]
#[command(version, about = "Browse and manage ATC position bookings", long_about = None)]
pub struct Cli {
    /// Override the directory holding persisted client state
    #[arg(long, value_name = "PATH", global = true, env = "BOOKING_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List upcoming bookings across the network
    List(ListCommand),

    /// Show bookings for a calendar date
    Date(DateCommand),

    /// Show your own bookings
    Mine(MineCommand),

    /// Show one booking in detail
    Show(ShowCommand),

    /// Create a new booking
    Create(CreateCommand),

    /// Edit one of your upcoming bookings
    Update(UpdateCommand),

    /// Delete one of your bookings
    Delete(DeleteCommand),

    /// Manage the VID that identifies you
    #[command(subcommand)]
    Vid(VidCommand),
}
