use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use career_agents::agents::gap_analyst::{
    generate_learning_syllabus, run_gap_analysis, JobDescriptions,
};
use career_agents::agents::interview::{
    language_from_path, run_behavioral_prep, run_code_review, run_system_design,
    CandidateInput, InterviewReply, InterviewSession, InterviewerPersona, DEFAULT_COMPANY,
    DEFAULT_ROLE, DEFAULT_SYSTEM_TO_DESIGN,
};
use career_agents::agents::outreach::{
    batch_outreach, default_output_path, generate_outreach, outreach_for_profile,
    profile_entry_finished, write_outreach, AngleChoice, OutreachAngle, DEFAULT_YOUR_NAME,
    DEFAULT_YOUR_SKILLS,
};
use career_agents::agents::tailor::{extract_keywords_from_jd, save_tailored_resume, tailor_resume};
use career_agents::config::Config;
use career_agents::inputs::load_text;
use career_agents::llm_client::{ChatModel, LlmClient};
use career_agents::logging::init_cli_logging;
use career_agents::pipeline::{run_pipeline_with, PipelineInput, PipelineStep};
use career_agents::report::{banner, render_action_plan, render_gap_report, render_tailor_report, rule};

#[derive(Parser, Debug)]
#[command(name = "career", version, about = "Career coaching agents")]
struct Cli {
    #[arg(long, short, global = true, help = "Debug-level logging on stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a resume against one or more job descriptions
    Gap {
        #[arg(long, help = "Path to your resume .txt file")]
        resume: PathBuf,
        #[arg(long, num_args = 1.., help = "Paths to JD text files")]
        jds: Vec<PathBuf>,
        #[arg(long = "jd-folder", alias = "jd_folder", help = "Folder containing JD .txt files")]
        jd_folder: Option<PathBuf>,
        #[arg(long, help = "Generate a 3-day syllabus for a specific skill")]
        learn: Option<String>,
        #[arg(long, help = "Save the JSON report to this file")]
        output: Option<PathBuf>,
    },
    /// Rewrite a resume for one job description
    Tailor {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        jd: PathBuf,
        #[arg(long, default_value = "tailored_resume.txt")]
        output: PathBuf,
    },
    /// Draft LinkedIn outreach messages
    Outreach {
        #[arg(long, help = "Path to a single LinkedIn profile .txt")]
        profile: Option<PathBuf>,
        #[arg(long = "profiles-folder", alias = "profiles_folder")]
        profiles_folder: Option<PathBuf>,
        #[arg(long = "your-skills", alias = "your_skills", default_value = DEFAULT_YOUR_SKILLS)]
        your_skills: String,
        #[arg(long, value_enum, default_value_t = OutreachAngle::Connect)]
        angle: OutreachAngle,
        #[arg(long = "your-name", alias = "your_name", default_value = DEFAULT_YOUR_NAME)]
        your_name: String,
        #[arg(long)]
        interactive: bool,
    },
    /// Mock interviews, code review, behavioral and system design prep
    Interview {
        #[arg(long, value_enum)]
        mode: InterviewMode,
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
        #[arg(long, default_value = DEFAULT_COMPANY)]
        company: String,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long, value_enum, default_value_t = InterviewerPersona::PrincipalEngineer)]
        persona: InterviewerPersona,
        #[arg(long, help = "Path to code file for review")]
        code: Option<PathBuf>,
        #[arg(long, help = "System to design (system_design mode)")]
        system: Option<String>,
    },
    /// Run gap analysis, tailoring, outreach and interview prep in sequence
    Pipeline {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        jd: PathBuf,
        #[arg(long, help = "LinkedIn profile .txt for outreach")]
        profile: Option<PathBuf>,
        #[arg(long = "output-dir", default_value = ".")]
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InterviewMode {
    #[value(name = "interview")]
    Interview,
    #[value(name = "code_review")]
    CodeReview,
    #[value(name = "behavioral")]
    Behavioral,
    #[value(name = "system_design")]
    SystemDesign,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logging(cli.verbose);

    let config = Config::from_env()?;
    let llm = LlmClient::new(
        config.require_api_key()?,
        config.xai_base_url.clone(),
        config.model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;

    match cli.command {
        Commands::Gap {
            resume,
            jds,
            jd_folder,
            learn,
            output,
        } => gap(&llm, &resume, &jds, jd_folder.as_deref(), learn, output).await,
        Commands::Tailor { resume, jd, output } => tailor(&llm, &resume, &jd, &output).await,
        Commands::Outreach {
            profile,
            profiles_folder,
            your_skills,
            angle,
            your_name,
            interactive,
        } => {
            if interactive {
                outreach_interactive(&llm).await
            } else if let Some(folder) = profiles_folder {
                for draft in batch_outreach(&llm, &folder, &your_skills, angle, &your_name).await? {
                    println!("\n{}", banner(&format!("👤 Outreach for: {}", draft.person)));
                    println!("{}", draft.messages);
                }
                Ok(())
            } else if let Some(profile) = profile {
                let draft =
                    outreach_for_profile(&llm, &profile, &your_skills, angle, &your_name).await?;
                println!("\n👤 Personalized outreach for: {}\n{}", draft.person, rule('='));
                println!("{}", draft.messages);
                let path = default_output_path(&profile);
                write_outreach(&path, &draft)?;
                println!("\n💾 Messages saved to: {}", path.display());
                Ok(())
            } else {
                println!("💡 No profile given, launching interactive mode...");
                outreach_interactive(&llm).await
            }
        }
        Commands::Interview {
            mode,
            role,
            company,
            topic,
            persona,
            code,
            system,
        } => match mode {
            InterviewMode::Interview => {
                mock_interview(&llm, &role, &company, topic.as_deref(), persona).await
            }
            InterviewMode::CodeReview => {
                let path = code.context("--code is required for code_review mode")?;
                let source = load_text(&path)?;
                println!("\n{}", banner("🔍 CODE REVIEW SESSION"));
                println!("{}", run_code_review(&llm, &source, &language_from_path(&path)).await?);
                Ok(())
            }
            InterviewMode::Behavioral => {
                println!("\n{}", banner("🎯 BEHAVIORAL INTERVIEW PREP"));
                println!("{}", run_behavioral_prep(&llm, &role).await?);
                Ok(())
            }
            InterviewMode::SystemDesign => {
                let target = system
                    .or(topic)
                    .unwrap_or_else(|| DEFAULT_SYSTEM_TO_DESIGN.to_string());
                println!("\n{}", banner(&format!("🏗️  SYSTEM DESIGN INTERVIEW: {target}")));
                println!("{}", run_system_design(&llm, &role, &target).await?);
                Ok(())
            }
        },
        Commands::Pipeline {
            resume,
            jd,
            profile,
            output_dir,
        } => pipeline(&llm, &resume, &jd, profile.as_deref(), output_dir).await,
    }
}

async fn gap(
    model: &dyn ChatModel,
    resume: &Path,
    jd_files: &[PathBuf],
    jd_folder: Option<&Path>,
    learn: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let resume = load_text(resume)?;

    let mut jds = JobDescriptions::new();
    if let Some(folder) = jd_folder {
        jds.extend_from_folder(folder)?;
    }
    for path in jd_files {
        jds.add_file(path)?;
    }
    if jds.is_empty() {
        bail!("Provide at least one JD via --jds or --jd-folder");
    }

    println!("📄 Loaded resume + {} JDs: {:?}", jds.len(), jds.titles());

    let report = run_gap_analysis(model, &resume, &jds).await?;
    println!("{}", render_gap_report(&report));

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n💾 Full JSON report saved to: {}", path.display());
    }

    if let Some(skill) = learn {
        println!("\n📚 Generating 3-day crash course for: {skill}");
        println!("{}", generate_learning_syllabus(model, &skill).await?);
    }

    Ok(())
}

async fn tailor(model: &dyn ChatModel, resume: &Path, jd: &Path, output: &Path) -> Result<()> {
    let resume_text = load_text(resume)?;
    let jd_text = load_text(jd)?;
    println!("📄 Resume loaded: {}", resume.display());
    println!("📋 JD loaded: {}", jd.display());

    println!("\n🔑 Extracting ATS keywords from JD...");
    let keywords = extract_keywords_from_jd(model, &jd_text).await?;
    println!(
        "   Found: {} keywords across {} categories",
        keywords.total(),
        keywords.category_count()
    );

    println!("\n✍️  Tailoring your resume...");
    let report = tailor_resume(model, &resume_text, &jd_text, &keywords).await?;
    let saved = save_tailored_resume(&report, output)?;
    println!("{}", render_tailor_report(&report, saved.then_some(output)));
    Ok(())
}

async fn pipeline(
    model: &dyn ChatModel,
    resume: &Path,
    jd: &Path,
    profile: Option<&Path>,
    output_dir: PathBuf,
) -> Result<()> {
    let input = PipelineInput {
        resume: load_text(resume)?,
        jd: load_text(jd)?,
        profile: profile.map(load_text).transpose()?,
        output_dir,
    };

    println!("\n{}", banner("🚀 CAREER AGENT PIPELINE STARTING"));
    let outcome = run_pipeline_with(model, &input, print_step).await?;

    println!("{}", render_action_plan(&outcome));
    Ok(())
}

fn print_step(step: PipelineStep<'_>) {
    match step {
        PipelineStep::GapAnalysis(report) => {
            println!("\n\n📊 STEP 1/4: GAP ANALYSIS\n{}", rule('-'));
            println!("{}", render_gap_report(report));
        }
        PipelineStep::Tailoring {
            report, saved_to, ..
        } => {
            println!("\n\n✍️  STEP 2/4: RESUME TAILORING\n{}", rule('-'));
            println!("{}", render_tailor_report(report, saved_to));
        }
        PipelineStep::Outreach(Some(outreach)) => {
            println!("\n\n🤝 STEP 3/4: LINKEDIN OUTREACH\n{}", rule('-'));
            println!("{}", outreach.messages);
            println!("\n💾 Outreach saved to: {}", outreach.path.display());
        }
        PipelineStep::Outreach(None) => {
            println!("\n⏭️  STEP 3/4: SKIPPED (no --profile provided)")
        }
        PipelineStep::InterviewPrep(text) => {
            println!("\n\n🎙️  STEP 4/4: INTERVIEW PREP\n{}", rule('-'));
            println!("{text}");
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interactive modes
// ────────────────────────────────────────────────────────────────────────────

struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `prompt` without a newline and reads one line. `None` on end of input.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}

async fn outreach_interactive(model: &dyn ChatModel) -> Result<()> {
    let mut console = Console::new();

    println!("\n{}", banner("🤝 LinkedIn Outreach Drafter - Interactive Mode"));

    let your_name = console
        .ask("Your name: ")
        .await?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_YOUR_NAME.to_string());
    let your_skills = console
        .ask("Your key skills (comma-separated): ")
        .await?
        .unwrap_or_default()
        .trim()
        .to_string();

    println!("\nOutreach angle options:");
    for angle in OutreachAngle::ALL {
        println!("  {}: {}", angle.key(), angle.description());
    }
    let choice = console
        .ask("\nChoose angle (default: connect): ")
        .await?
        .unwrap_or_default();
    let angle = AngleChoice::parse(&choice);
    if let AngleChoice::Custom(text) = &angle {
        println!("Using your own angle: {text}");
    }

    println!("\nPaste the LinkedIn profile text (press Enter twice when done):");
    let mut lines: Vec<String> = Vec::new();
    while let Some(line) = console.ask("").await? {
        if profile_entry_finished(&lines, &line) {
            break;
        }
        lines.push(line);
    }
    let profile = lines.join("\n").trim().to_string();

    if profile.is_empty() {
        println!("❌ No profile text provided.");
        return Ok(());
    }

    println!("\n✍️  Generating personalized outreach...");
    let messages = generate_outreach(model, &profile, &your_skills, angle, &your_name).await?;
    println!("\n{}\n{messages}", rule('='));
    Ok(())
}

async fn mock_interview(
    model: &dyn ChatModel,
    role: &str,
    company: &str,
    topic: Option<&str>,
    persona: InterviewerPersona,
) -> Result<()> {
    let mut session = InterviewSession::new(role, company, topic, persona);
    let mut console = Console::new();

    println!("\n🎙️  MOCK INTERVIEW SESSION");
    println!("   Role: {role} | Company: {company}");
    println!("   Interviewer: {}", persona.profile().title);
    println!("{}", rule('='));
    println!("   Type 'quit' to end | Type 'skip' to skip a question");
    println!("   Type 'hint' to get a hint on the current question");
    println!("{}\n", rule('='));

    let opening = session.open(model).await?;
    println!("🧑‍💼 Interviewer: {opening}\n");

    while !session.is_finished() {
        let input = match console.ask("You: ").await? {
            Some(line) => CandidateInput::parse(&line),
            None => CandidateInput::Quit,
        };

        if input == CandidateInput::Quit {
            println!("\n📝 Requesting final assessment...");
        }

        match session.respond(model, input).await? {
            InterviewReply::Interviewer(text) => println!("\n🧑‍💼 Interviewer: {text}\n"),
            InterviewReply::Hint(text) => println!("\n💡 Hint: {text}\n"),
            InterviewReply::FinalAssessment(text) => {
                println!("\n🧑‍💼 Final Assessment:\n{text}")
            }
        }
    }

    Ok(())
}
