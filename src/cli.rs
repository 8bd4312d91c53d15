// src/cli.rs
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::applicant::{fetch_profile_status, ProfileStatus};
use crate::auth::AuthSession;
use crate::core::{ConfigManager, Preferences};
use crate::display::{
    bookmark_deadline_message, domain_label, enrollment_line, position_label,
    posting_deadline_message,
};
use crate::filters::{find_category, order_label, FilterState, POSITION_CATEGORIES};
use crate::forms::{CvFile, ProfileDraft, SignInForm, SignUpForm};
use crate::types::{ApplicantProfile, Domain, Order, PositionType, Post, PostsPage};

#[derive(Parser)]
#[command(name = "internhasha")]
#[command(about = "Browse internship postings, manage bookmarks and your applicant profile")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Optional YAML file with `local` / `production` overrides
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an applicant account and sign in with it
    Signup {
        #[arg(long)]
        name: String,
        /// Email id; the configured domain is appended when no `@` is given
        #[arg(long)]
        email_id: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirm: String,
    },
    /// Sign in and remember the session
    Signin {
        #[arg(long)]
        email_id: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Signout,
    /// Show the signed-in user
    Me,
    /// List postings using the stored filters, optionally changing them first
    Posts(PostsArgs),
    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommand,
    },
    /// Show or save the applicant profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Args, Default)]
pub struct PostsArgs {
    /// Position to filter on (FRONT, APP, BACKEND, DATA, OTHERS, DESIGN, PLANNER, MARKETING)
    #[arg(long = "position")]
    pub positions: Vec<String>,
    /// Position category to toggle (DEV, DESIGN, PLANNER, MARKETING)
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Company domain to filter on
    #[arg(long = "domain")]
    pub domains: Vec<String>,
    /// Only postings still recruiting
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,
    /// Include closed postings again
    #[arg(long)]
    pub inactive: bool,
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
    /// Zero-based page index
    #[arg(long)]
    pub page: Option<u32>,
    /// Clear the stored filters
    #[arg(long)]
    pub reset: bool,
}

impl PostsArgs {
    fn changes_filters(&self) -> bool {
        !self.positions.is_empty()
            || !self.categories.is_empty()
            || !self.domains.is_empty()
            || self.active
            || self.inactive
            || self.order.is_some()
    }

    /// Apply the requested toggles on top of the stored filters
    fn to_filters(&self, stored: &FilterState) -> Result<FilterState> {
        let mut filters = stored.clone();

        for raw in &self.positions {
            let position = PositionType::parse(raw)
                .with_context(|| format!("Unknown position: {}", raw))?;
            filters.toggle_position(position);
        }
        for raw in &self.categories {
            let category =
                find_category(raw).with_context(|| format!("Unknown category: {}", raw))?;
            filters.toggle_category(category);
        }
        for raw in &self.domains {
            let domain = Domain::parse(raw).with_context(|| format!("Unknown domain: {}", raw))?;
            filters.toggle_domain(domain);
        }
        if self.active {
            filters.is_active = true;
        } else if self.inactive {
            filters.is_active = false;
        }
        if let Some(order) = self.order {
            filters.order = order.into();
        }

        Ok(filters)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Latest,
    Deadline,
}

impl From<OrderArg> for Order {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Latest => Order::Latest,
            OrderArg::Deadline => Order::Deadline,
        }
    }
}

#[derive(Subcommand)]
pub enum BookmarkCommand {
    Add { post_id: String },
    Remove { post_id: String },
    List,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    /// Create the profile, or edit it when one exists
    Save {
        /// Two-digit student id, e.g. 25
        #[arg(long)]
        student_id: String,
        /// Majors, primary first (up to 7)
        #[arg(long = "major", required = true)]
        majors: Vec<String>,
        /// PDF CV, at most 5 MB. Optional when editing a profile that already has one.
        #[arg(long)]
        cv: Option<PathBuf>,
    },
}

pub async fn handle_command(command: Command, config: &ConfigManager) -> Result<()> {
    let client = config.api_client()?;
    let mut session = AuthSession::new(client, config.token_store());

    match command {
        Command::Signup {
            name,
            email_id,
            password,
            password_confirm,
        } => {
            let form = SignUpForm {
                name,
                email_id,
                password,
                password_confirm,
            };
            if !form.is_submittable() {
                anyhow::bail!("All fields are required and the passwords must match");
            }

            let email = config.email_for(&form.email_id);
            let result = session.client().sign_up(&form.to_request(&email)).await?;
            info!("Signed up user {}", result.user.id);

            let user = session.login(&result.token).await?;
            println!("✅ Signed up and signed in as {} <{}>", user.name, user.email);
        }

        Command::Signin { email_id, password } => {
            let form = SignInForm { email_id, password };
            if !form.is_submittable() {
                anyhow::bail!("Email and password are required");
            }

            let email = config.email_for(&form.email_id);
            let result = session.client().sign_in(&form.to_request(&email)).await?;
            let user = session.login(&result.token).await?;
            println!("✅ Signed in as {} <{}>", user.name, user.email);
        }

        Command::Signout => {
            session.logout().await?;
            println!("Signed out");
        }

        Command::Me => match session.restore().await? {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!("  ID:      {}", user.id);
                println!("  Joined:  {}", user.created_at);
            }
            None => println!("Not signed in"),
        },

        Command::Posts(args) => list_posts(&session, config, args).await?,

        Command::Bookmark { command } => {
            let token = session.require_token().await?;
            match command {
                BookmarkCommand::Add { post_id } => {
                    session.client().set_bookmark(&post_id, &token, true).await?;
                    println!("★ Bookmarked {}", post_id);
                }
                BookmarkCommand::Remove { post_id } => {
                    session.client().set_bookmark(&post_id, &token, false).await?;
                    println!("☆ Removed bookmark {}", post_id);
                }
                BookmarkCommand::List => {
                    let page = session.client().get_bookmarks(&token).await?;
                    print_bookmarks(&page);
                }
            }
        }

        Command::Profile { command } => {
            let token = session.require_token().await?;
            let status = fetch_profile_status(session.client(), Some(&token)).await?;

            match command {
                ProfileCommand::Show => match status.profile() {
                    Some(profile) => print_profile(profile),
                    None => {
                        println!("아직 프로필이 등록되지 않았어요!");
                        println!("Create one with: internhasha profile save --student-id <NN> --major <name> --cv <file.pdf>");
                    }
                },
                ProfileCommand::Save {
                    student_id,
                    majors,
                    cv,
                } => {
                    let mut draft = match &status {
                        ProfileStatus::Exists(profile) => ProfileDraft::from_profile(profile),
                        ProfileStatus::NotFound => ProfileDraft::new(),
                    };
                    draft.student_id = student_id;
                    draft.set_majors(majors);
                    if let Some(path) = cv {
                        let cv = CvFile::from_path(&path)?.map_err(|msg| anyhow::anyhow!(msg))?;
                        draft.cv = Some(cv);
                    }

                    let update = draft.validate()?;
                    let saved = session
                        .client()
                        .update_applicant_profile(&token, &update)
                        .await?;

                    if draft.edit_mode {
                        println!("✅ 프로필이 수정되었습니다.");
                    } else {
                        println!("✅ 프로필이 저장되었습니다.");
                    }
                    print_profile(&saved);
                }
            }
        }
    }

    Ok(())
}

async fn list_posts(session: &AuthSession, config: &ConfigManager, args: PostsArgs) -> Result<()> {
    let store = config.preference_store();
    let mut prefs: Preferences = store.load().await;

    if args.reset {
        prefs.apply_filters(FilterState::default());
    }
    if args.changes_filters() {
        let filters = args.to_filters(&prefs.filters)?;
        prefs.apply_filters(filters);
    }
    if let Some(page) = args.page {
        prefs.page = page;
    }

    let token = session.token().await?;
    let mut result = session
        .client()
        .get_posts(&prefs.filters.to_params(prefs.page), token.as_deref())
        .await?;

    let clamped = result.paginator.clamp_page(prefs.page);
    if clamped != prefs.page {
        info!("Page {} is out of range, showing page {}", prefs.page, clamped);
        prefs.page = clamped;
        result = session
            .client()
            .get_posts(&prefs.filters.to_params(prefs.page), token.as_deref())
            .await?;
    }

    print_filters(&prefs.filters);
    print_posts(&result, prefs.page);

    store.save(&prefs).await?;
    Ok(())
}

fn print_filters(filters: &FilterState) {
    if filters.is_default() {
        return;
    }

    let mut parts = Vec::new();
    if filters.has_position_filter() {
        parts.push(format!("직군: {}", position_summary(&filters.positions).join(", ")));
    }
    if filters.has_domain_filter() {
        let labels: Vec<&str> = filters.domains.iter().map(|d| domain_label(*d)).collect();
        parts.push(format!("업종: {}", labels.join(", ")));
    }
    if filters.has_status_filter() {
        parts.push("모집중".to_string());
    }
    if filters.has_order_filter() {
        parts.push(order_label(filters.order).to_string());
    }
    println!("Filters: {}", parts.join(" | "));
}

/// Fully selected categories by their label, remaining positions one by one
fn position_summary(positions: &[PositionType]) -> Vec<&'static str> {
    let mut labels = Vec::new();
    let mut covered: Vec<PositionType> = Vec::new();

    for category in &POSITION_CATEGORIES {
        if category.values.len() > 1 && category.values.iter().all(|v| positions.contains(v)) {
            labels.push(category.label);
            covered.extend_from_slice(category.values);
        }
    }
    labels.extend(
        positions
            .iter()
            .filter(|p| !covered.contains(*p))
            .map(|p| position_label(*p)),
    );
    labels
}

fn print_posts(result: &PostsPage, page: u32) {
    if result.posts.is_empty() {
        println!("No postings found.");
        return;
    }

    let today = Local::now().date_naive();
    for post in &result.posts {
        print_post(post, today);
    }
    println!();
    println!(
        "Page {}/{}",
        page.saturating_add(1),
        result.paginator.last_page.max(1)
    );
}

fn print_post(post: &Post, today: chrono::NaiveDate) {
    let mark = if post.is_bookmarked { "★" } else { "☆" };
    println!(
        "{} {:<20} {} [{}] {}",
        mark,
        post.company_name,
        post.position_title,
        domain_label(post.domain),
        posting_deadline_message(post.employment_end_date.as_deref(), today)
    );
    println!("    id: {}", post.id);
    if !post.slogan.is_empty() {
        println!("    {}", post.slogan);
    }
}

fn print_bookmarks(page: &PostsPage) {
    if page.posts.is_empty() {
        println!("아직 관심공고가 없어요.");
        return;
    }

    let now = Local::now();
    for post in &page.posts {
        let position = post
            .position_type
            .map(position_label)
            .unwrap_or(post.position_title.as_str());
        println!(
            "★ {:<20} {:<20} {}",
            post.company_name,
            position,
            bookmark_deadline_message(post.employment_end_date.as_deref(), now)
        );
        println!("    id: {}", post.id);
    }
}

fn print_profile(profile: &ApplicantProfile) {
    println!("{}", profile.name);
    println!("  {}", profile.email);
    println!(
        "  {}",
        enrollment_line(profile.department.as_deref(), profile.enroll_year)
    );

    if !profile.has_optional_sections() {
        return;
    }
    println!();
    println!("기본 정보");
    if let Some(positions) = &profile.positions {
        println!("  희망 직무: {}", positions.join(", "));
    }
    if let Some(stacks) = &profile.stacks {
        println!("  기술 스택: {}", stacks.join(", "));
    }
    if let Some(explanation) = &profile.explanation {
        println!("  자기소개: {}", explanation);
    }
    if let Some(links) = &profile.links {
        for link in links {
            println!("  {} - {}", link.description, link.link);
        }
    }
}
