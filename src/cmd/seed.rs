use crate::{
    pkg::{
        internal::adaptors::{
            achievements::{
                mutators::{AchievementMutator, NewAchievement},
                selectors::AchievementSelector,
            },
            experiences::{
                mutators::{ExperienceMutator, NewExperience},
                selectors::ExperienceSelector,
            },
            skills::{
                mutators::{NewSkill, SkillMutator},
                selectors::SkillSelector,
            },
        },
        server::state::{GetTxn, db_pool},
    },
    prelude::Result,
};

fn experience(
    title: &str,
    company: &str,
    location: &str,
    period: &str,
    responsibilities: &[&str],
    order: i32,
) -> NewExperience {
    NewExperience {
        title: title.into(),
        company: company.into(),
        location: location.into(),
        period: period.into(),
        responsibilities: responsibilities.iter().map(|r| r.to_string()).collect(),
        order,
    }
}

fn skill(icon: &str, title: &str, category: &str, tone: &str, order: i32) -> NewSkill {
    NewSkill {
        icon: icon.into(),
        title: title.into(),
        category: category.into(),
        bg_color: format!("bg-{tone}/10"),
        icon_color: format!("text-{tone}"),
        order,
    }
}

fn achievement(
    title: &str,
    issuer: &str,
    date: &str,
    description: &str,
    image: &str,
    category: &str,
    order: i32,
) -> NewAchievement {
    NewAchievement {
        title: title.into(),
        issuer: issuer.into(),
        date: date.into(),
        description: Some(description.into()),
        image_url: format!("/certificates/{image}"),
        category: category.into(),
        order,
    }
}

pub(crate) fn experiences() -> Vec<NewExperience> {
    vec![
        experience(
            "Graphic Designer",
            "Dico Interiors",
            "Harare, Zimbabwe",
            "Dec 2024 – Feb 2025",
            &[
                "Produced high-quality product packaging designs",
                "Designed user interfaces for apps and websites",
                "Assisted video production with motion graphics",
                "Updated social media profiles with fresh graphics",
            ],
            0,
        ),
        experience(
            "IT Technician",
            "Coverlink Holdings",
            "Harare, Zimbabwe",
            "Jun 2024 – Aug 2024",
            &[
                "Managed IT backups and infrastructure plans",
                "Maintained systems and performed troubleshooting",
                "Kept IT asset records and ensured system security",
            ],
            1,
        ),
        experience(
            "Web Developer",
            "ZCAS University",
            "Lusaka, Zambia",
            "Mar 2024 – Apr 2024",
            &["Developed a website \"Wina Bwangu\" for transactions"],
            2,
        ),
    ]
}

pub(crate) fn skills() -> Vec<NewSkill> {
    vec![
        skill("fab fa-python", "Python", "Programming", "primary", 0),
        skill("fab fa-java", "Java", "OOP Programming", "secondary", 1),
        skill("fab fa-html5", "HTML5", "Web Development", "accent", 2),
        skill("fab fa-css3-alt", "CSS3", "Styling & Layout", "primary", 3),
        skill("fas fa-network-wired", "Networking", "Communication", "secondary", 4),
        skill("fas fa-project-diagram", "Project Mgmt", "IT Management", "accent", 5),
        skill("fab fa-adobe", "Adobe Tools", "Design Tools", "primary", 6),
        skill("fas fa-tasks", "Agile", "Methodologies", "secondary", 7),
    ]
}

pub(crate) fn achievements() -> Vec<NewAchievement> {
    const CISCO: &str = "Cisco Networking Academy";
    const CISCO_PYTHON: &str = "Cisco Networking Academy & Python Institute";
    vec![
        achievement(
            "Introduction to Cybersecurity",
            CISCO,
            "Sep 25, 2025",
            "Student level credential for completing the Introduction to Cybersecurity course",
            "cisco-cybersecurity.png",
            "cybersecurity",
            0,
        ),
        achievement(
            "Introduction to Internet of Things",
            CISCO,
            "Sep 26, 2025",
            "Student level credential for completing the Introduction to Internet of Things course",
            "cisco-iot.png",
            "networking",
            1,
        ),
        achievement(
            "Career Essentials in GitHub Professional Certificate",
            "LinkedIn Learning & GitHub",
            "Oct 13, 2025",
            "Learning Path completed by Nelson Chinyere - 4 hours 18 minutes",
            "github-career-essentials.png",
            "development",
            2,
        ),
        achievement(
            "Introduction to Modern AI",
            CISCO,
            "Sep 27, 2025",
            "Student level credential for completing the Introduction to Modern AI course",
            "cisco-modern-ai.png",
            "artificial intelligence",
            3,
        ),
        achievement(
            "Python Essentials 2",
            CISCO_PYTHON,
            "Oct 10, 2025",
            "Student level credential for completing the Python Essentials 2 course",
            "python-essentials-2.png",
            "programming",
            4,
        ),
        achievement(
            "Python Essentials 1",
            CISCO_PYTHON,
            "Oct 03, 2025",
            "Student level credential for completing the Python Essentials 1 course",
            "python-essentials-1.png",
            "programming",
            5,
        ),
        achievement(
            "Ethical Hacker",
            CISCO,
            "Sep 29, 2025",
            "Student level credential for completing the Ethical Hacker course",
            "cisco-ethical-hacker.png",
            "cybersecurity",
            6,
        ),
    ]
}

/// Seeds each content table that is still empty; populated tables are left alone.
pub async fn apply() -> Result<()> {
    let pool = db_pool()?;
    let mut tx = pool.begin_txn().await?;

    if ExperienceSelector::new(&mut tx).count().await? == 0 {
        for exp in experiences() {
            ExperienceMutator::new(&mut tx).create(exp).await?;
        }
        tracing::info!("experiences seeded");
    } else {
        tracing::info!("experiences already present, skipping");
    }

    if SkillSelector::new(&mut tx).count().await? == 0 {
        for s in skills() {
            SkillMutator::new(&mut tx).create(s).await?;
        }
        tracing::info!("skills seeded");
    } else {
        tracing::info!("skills already present, skipping");
    }

    if AchievementSelector::new(&mut tx).count().await? == 0 {
        for a in achievements() {
            AchievementMutator::new(&mut tx).create(a).await?;
        }
        tracing::info!("achievements seeded");
    } else {
        tracing::info!("achievements already present, skipping");
    }

    tx.commit().await?;
    Ok(())
}
