use clap::{Parser, Subcommand};
use joyful_gallery::config::{self, Environment, ImageResolver, SiteConfig};
use joyful_gallery::imaging::FileProbe;
use joyful_gallery::source::{FileSource, HttpSource, LoadError};
use joyful_gallery::{generate, output, sync, update, validate};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "joyful-gallery")]
#[command(about = "Gallery renderer and maintenance tools for a photography portfolio")]
#[command(long_about = "\
Gallery renderer and maintenance tools for a photography portfolio

The gallery is driven by one JSON document listing categories and their
images. Image files live in one folder per category:

  docs/
  ├── config.toml                  # Site config (optional)
  ├── gallery-data.json            # Gallery document
  └── images/
      ├── logo.jpg                 # Site images
      └── gallery/
          ├── animals/             # Category \"animals\"
          │   ├── fox.jpg
          │   └── owl.png
          └── street-art/
              └── mural.webp

Typical workflow: add photos to a category folder, run 'update' to pick them
up (existing captions are kept), edit captions in gallery-data.json, run
'validate', then 'sync' to publish the images.

Run 'joyful-gallery gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root (holds config.toml, gallery-data.json, and images/)
    #[arg(long, default_value = "docs", global = true)]
    root: PathBuf,

    /// Output directory for rendered pages
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sync gallery-data.json with the category folders on disk
    Update,
    /// Check that every referenced image exists and every image is referenced
    Validate {
        /// Also check each image against the production storage URL
        #[arg(long)]
        remote: bool,
    },
    /// Upload the image folder to object storage with the AWS CLI
    Sync,
    /// Render the gallery to static HTML, one page per category
    Render {
        /// Gallery document to load: an http(s) URL or a file path
        /// (default: <root>/<gallery.data_path>)
        #[arg(long)]
        source: Option<String>,

        /// URL the pages will be served from; decides local vs production
        /// image URLs (default: local)
        #[arg(long)]
        page_url: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Update => {
            let site = Site::load(&cli.root)?;
            let summary = update::update_gallery_file(
                &site.data_path,
                &site.images_root,
                &site.config.gallery.gallery_dir,
            )?;
            output::print_update_summary(&summary);
        }
        Command::Validate { remote } => {
            let site = Site::load(&cli.root)?;
            let mut ok = true;

            let report = validate::validate_local(
                &site.data_path,
                &site.images_root,
                &site.config.gallery.gallery_dir,
            )?;
            output::print_validation_report("Local", &report);
            ok &= report.is_ok();

            if remote {
                let resolver = site.resolver(Environment::Production);
                let check = validate::HttpHeadCheck::new()?;
                let report = validate::validate_remote(&site.data_path, &resolver, &check)?;
                output::print_validation_report("Remote", &report);
                ok &= report.is_ok();
            }

            if !ok {
                std::process::exit(1);
            }
        }
        Command::Sync => {
            let site = Site::load(&cli.root)?;
            let outcome = sync::run_sync(&site.config.storage, &site.images_root)?;
            output::print_sync_outcome(outcome, &site.config.storage.s3_uri());
        }
        Command::Render { source, page_url } => {
            let site = Site::load(&cli.root)?;
            let environment = match &page_url {
                Some(url) => Environment::from_page_url(url, &site.config.images.local_hosts)?,
                None => Environment::Local,
            };
            log::info!("Rendering for the {environment:?} environment");
            let resolver = site.resolver(environment);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let probe = FileProbe::new();
            let pages = match site.source(source.as_deref(), page_url.as_deref())? {
                Source::Http(http) => runtime.block_on(generate::render_site(
                    &site.config,
                    &resolver,
                    &http,
                    &probe,
                    &site.images_root,
                    &cli.output,
                ))?,
                Source::File(file) => runtime.block_on(generate::render_site(
                    &site.config,
                    &resolver,
                    &file,
                    &probe,
                    &site.images_root,
                    &cli.output,
                ))?,
            };
            output::print_render_output(&pages);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Loaded config plus the paths derived from it.
struct Site {
    config: SiteConfig,
    data_path: PathBuf,
    images_root: PathBuf,
}

impl Site {
    fn load(root: &Path) -> Result<Self, config::ConfigError> {
        let config = config::load_config(root)?;
        Ok(Self {
            data_path: root.join(&config.gallery.data_path),
            images_root: root.join(&config.gallery.images_dir),
            config,
        })
    }

    fn resolver(&self, environment: Environment) -> ImageResolver {
        ImageResolver::new(
            environment,
            &self.config.images.local_base,
            &self.config.storage.base_url(),
        )
    }

    /// An explicit `--source` wins; otherwise fetch relative to `--page-url`,
    /// or read the local data file.
    fn source(&self, source: Option<&str>, page_url: Option<&str>) -> Result<Source, LoadError> {
        match (source, page_url) {
            (Some(s), _) if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Source::Http(HttpSource::new(s)?))
            }
            (Some(path), _) => Ok(Source::File(FileSource::new(path))),
            (None, Some(url)) => Ok(Source::Http(HttpSource::relative_to(
                url,
                &self.config.gallery.data_path,
            )?)),
            (None, None) => Ok(Source::File(FileSource::new(&self.data_path))),
        }
    }
}

enum Source {
    Http(HttpSource),
    File(FileSource),
}
