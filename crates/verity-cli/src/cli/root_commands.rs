use std::path::PathBuf;

use clap::{Args, Subcommand};
use verity_core::SignUpForm;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Probe the backend once and print its connectivity state.
    Health,
    /// Analyze a piece of text.
    Text(TextArgs),
    /// Analyze the article at a URL.
    Url(UrlArgs),
    /// Analyze an image file.
    Image(ImageArgs),
    /// Fetch evidence for a query from the backend.
    Evidence(EvidenceArgs),
    /// Interactive dashboard session reading commands from stdin.
    Shell,
    /// Create an account and open a signed-in session.
    Signup(SignupArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TextArgs {
    /// Text to analyze.
    pub body: String,
    /// Title sent with the text (defaults to the first line).
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UrlArgs {
    /// Article address.
    pub address: String,
}

#[derive(Clone, Debug, Args)]
pub struct ImageArgs {
    /// Path to the image file.
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct EvidenceArgs {
    /// Claim or topic to look up.
    pub query: String,
}

#[derive(Clone, Debug, Args)]
pub struct SignupArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    /// Repeat of the password (defaults to empty, which fails the match check).
    #[arg(long, default_value = "")]
    pub confirm_password: String,
    #[arg(long, default_value = "")]
    pub organization: String,
    /// Accept the terms and conditions.
    #[arg(long)]
    pub agree_to_terms: bool,
    /// Continue into the interactive shell as the new user.
    #[arg(long)]
    pub shell: bool,
}

impl SignupArgs {
    #[must_use]
    pub fn form(&self) -> SignUpForm {
        SignUpForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            organization: self.organization.clone(),
            agree_to_terms: self.agree_to_terms,
        }
    }
}
