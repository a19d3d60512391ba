use crate::dto::job_dto::NewJob;
use crate::error::Result;
use crate::models::job::JobType;
use crate::services::job_service::JobService;
use sqlx::PgPool;

struct SeedJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    category: &'static str,
    job_type: JobType,
    salary: &'static str,
    description: &'static str,
    requirements: &'static str,
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        title: "Senior Frontend Developer",
        company: "TechCorp Solutions",
        location: "Dhaka, Bangladesh",
        category: "Engineering",
        job_type: JobType::FullTime,
        salary: "$60,000 - $80,000",
        description: "Build and maintain customer-facing web applications with a modern \
            JavaScript stack, working closely with design and backend teams and mentoring \
            junior developers.",
        requirements: "• 5+ years of frontend development\n• React or Next.js\n• TypeScript\n\
            • Tailwind CSS or similar\n• RESTful APIs",
    },
    SeedJob {
        title: "Backend Laravel Developer",
        company: "Innovate BD",
        location: "Chittagong, Bangladesh",
        category: "Engineering",
        job_type: JobType::FullTime,
        salary: "$50,000 - $70,000",
        description: "Design and implement scalable APIs, tune database queries and keep \
            backend services secure and fast for thousands of daily users.",
        requirements: "• 3+ years of Laravel\n• MySQL or PostgreSQL\n• Redis\n\
            • Microservice architecture\n• Git",
    },
    SeedJob {
        title: "UI/UX Designer",
        company: "Creative Studio",
        location: "Remote",
        category: "Design",
        job_type: JobType::Remote,
        salary: "$45,000 - $65,000",
        description: "Run user research, produce wireframes and prototypes, and deliver \
            high-fidelity designs in Figma together with clients and developers.",
        requirements: "• 3+ years of UI/UX design\n• Figma\n• Web and mobile portfolio\n\
            • Design systems",
    },
    SeedJob {
        title: "Mobile App Developer (React Native)",
        company: "AppWorks Ltd",
        location: "Dhaka, Bangladesh",
        category: "Mobile",
        job_type: JobType::FullTime,
        salary: "$55,000 - $75,000",
        description: "Ship high-performance cross-platform mobile apps, integrate them with \
            backend APIs and maintain the existing consumer applications.",
        requirements: "• 2+ years of React Native\n• iOS and Android\n• Redux or Context API\n\
            • App store releases",
    },
    SeedJob {
        title: "Data Science Intern",
        company: "DataMind Analytics",
        location: "Dhaka, Bangladesh",
        category: "Data Science",
        job_type: JobType::Internship,
        salary: "$1,000 - $1,500/month",
        description: "Analyze datasets, build predictive models and create visualizations \
            alongside experienced data scientists on real projects.",
        requirements: "• CS or related degree in progress\n• Python\n\
            • pandas, numpy, scikit-learn\n• Machine learning basics",
    },
    SeedJob {
        title: "DevOps Engineer",
        company: "CloudBase Inc",
        location: "Remote",
        category: "DevOps",
        job_type: JobType::Remote,
        salary: "$70,000 - $90,000",
        description: "Own cloud infrastructure and CI/CD pipelines on AWS or GCP, run \
            containers on Kubernetes and automate deployments.",
        requirements: "• 4+ years of DevOps\n• AWS or GCP\n• Docker and Kubernetes\n\
            • CI/CD tooling\n• Terraform or Ansible",
    },
    SeedJob {
        title: "Product Manager",
        company: "StartupHub BD",
        location: "Dhaka, Bangladesh",
        category: "Product",
        job_type: JobType::FullTime,
        salary: "$60,000 - $85,000",
        description: "Lead the core product team: set strategy, prioritize features, write \
            PRDs and work with engineering and design on growth.",
        requirements: "• 4+ years of product management\n• Agile delivery\n\
            • Data-driven decisions\n• Strong communication",
    },
    SeedJob {
        title: "Content Writer (Tech)",
        company: "MediaTech Group",
        location: "Remote",
        category: "Marketing",
        job_type: JobType::PartTime,
        salary: "$25,000 - $35,000",
        description: "Research and write articles, blog posts and documentation on software \
            development and technology trends for a developer audience.",
        requirements: "• 2+ years of tech writing\n• Strong written English\n• SEO\n\
            • Reliable with deadlines",
    },
];

impl SeedJob {
    fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            category: self.category.to_string(),
            job_type: self.job_type,
            salary: Some(self.salary.to_string()),
            description: self.description.to_string(),
            requirements: Some(self.requirements.to_string()),
            logo: None,
        }
    }
}

/// Inserts the demonstration postings that are not present yet, matched by
/// title and company. With `fresh`, every existing job (and through the
/// cascade every application) is removed first. Returns the number inserted.
pub async fn seed_jobs(pool: &PgPool, fresh: bool) -> Result<usize> {
    if fresh {
        let removed = sqlx::query("DELETE FROM jobs").execute(pool).await?;
        tracing::warn!(removed = removed.rows_affected(), "cleared existing jobs");
    }

    let jobs = JobService::new(pool.clone());
    let mut inserted = 0;
    for seed in SEED_JOBS {
        let present = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM jobs WHERE title = $1 AND company = $2)",
        )
        .bind(seed.title)
        .bind(seed.company)
        .fetch_one(pool)
        .await?;

        if present {
            tracing::debug!(title = seed.title, "seed job already present");
            continue;
        }

        jobs.create(seed.to_new_job()).await?;
        inserted += 1;
    }

    tracing::info!(inserted, "seeded jobs");
    Ok(inserted)
}
