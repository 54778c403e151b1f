//! The canonical site catalogue.
//!
//! All section content is literal data built once on first access and shared
//! for the life of the process.

use std::sync::OnceLock;

use serde::Serialize;

use portfolio_models::{
    Certification, ContactChannel, Feature, Icon, Profile, Project, ResumeLink, SectionId,
    SkillGroup, SkillHighlight, SocialLink, Stat, Tone, QUICK_LINKS,
};

use crate::expansion::{ExpandableList, PROJECTS_COLLAPSED};

const GITHUB: &str = "https://github.com/mr-akash12";
const LINKEDIN: &str = "https://www.linkedin.com/in/akash-kumarnayak";
const EMAIL: &str = "akashsiku2004@gmail.com";

/// Every record rendered on the page.
#[derive(Debug, Clone, Serialize)]
pub struct Catalogue {
    pub profile: Profile,
    pub features: Vec<Feature>,
    pub skill_groups: Vec<SkillGroup>,
    pub skill_highlights: Vec<SkillHighlight>,
    pub certifications: Vec<Certification>,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub contact_channels: Vec<ContactChannel>,
    pub quick_links: Vec<SectionId>,
    pub copyright: String,
}

static CANONICAL: OnceLock<Catalogue> = OnceLock::new();

impl Catalogue {
    /// The shared catalogue instance.
    pub fn canonical() -> &'static Catalogue {
        CANONICAL.get_or_init(Catalogue::build)
    }

    /// The projects as a collapsed expandable list.
    pub fn project_list(&self) -> ExpandableList<Project> {
        ExpandableList::new(self.projects.clone(), PROJECTS_COLLAPSED)
    }

    fn build() -> Self {
        Self {
            profile: profile(),
            features: features(),
            skill_groups: skill_groups(),
            skill_highlights: skill_highlights(),
            certifications: certifications(),
            stats: stats(),
            projects: projects(),
            contact_channels: contact_channels(),
            quick_links: QUICK_LINKS.to_vec(),
            copyright: "© 2025 Data Science Portfolio. All rights reserved.".to_string(),
        }
    }
}

fn repo(name: &str) -> String {
    format!("{}/{}.git", GITHUB, name)
}

fn profile() -> Profile {
    Profile {
        name: "Akash Kumar Nayak".into(),
        headline: "📊 Junior Data Scientist".into(),
        summary: "Junior Data Scientist skilled in SQL, Python, Excel, Power BI, and Machine \
                  Learning. Experienced in data cleaning, feature engineering, exploratory data \
                  analysis (EDA), and time series forecasting. Proficient in building interactive \
                  dashboards and data visualizations to generate actionable insights and support \
                  data-driven business decisions."
            .into(),
        avatar: "/assets/akash.png".into(),
        journey: vec![
            "I'm a Data Analyst skilled in SQL, Python, Excel, Power BI, and Machine Learning. \
             I specialize in data cleaning, feature engineering, exploratory data analysis (EDA), \
             and time series forecasting. With hands-on experience at Cognifyz Technologies, \
             I developed regression models on 200,000+ rows and delivered pricing strategy \
             recommendations that improved fare prediction accuracy by 42%."
                .into(),
            "I hold a B.Tech in Computer Science from Gandhi Engineering College (CGPA: 7.6/10) \
             and am certified by Google and IBM in Data Analytics and Machine Learning. \
             I'm passionate about building interactive dashboards and generating actionable \
             insights that support data-driven business decisions."
                .into(),
        ],
        resumes: vec![
            ResumeLink {
                label: "Data Analyst Resume".into(),
                href: "/AkashKumarNayak_Data_Analyst_CV.pdf".into(),
            },
            ResumeLink {
                label: "Data Scientist Resume".into(),
                href: "/Akash_Kumar_Nayak_DataScientist_CV.pdf".into(),
            },
        ],
        tagline: "Data-driven analyst dedicated to transforming information into actionable \
                  insights for business growth."
            .into(),
        socials: vec![
            SocialLink {
                icon: Icon::Twitter,
                href: "#".into(),
            },
            SocialLink {
                icon: Icon::Linkedin,
                href: LINKEDIN.into(),
            },
            SocialLink {
                icon: Icon::Github,
                href: GITHUB.into(),
            },
        ],
    }
}

fn features() -> Vec<Feature> {
    let feature = |icon, title: &str, description: &str, tone| Feature {
        icon,
        title: title.into(),
        description: description.into(),
        tone,
    };
    vec![
        feature(
            Icon::Database,
            "Data Expertise",
            "Extensive experience with large datasets, ETL processes, and data warehousing solutions.",
            Tone::Primary,
        ),
        feature(
            Icon::TrendingUp,
            "Visual Storytelling",
            "Transforming complex data into intuitive visualizations that tell compelling stories.",
            Tone::Secondary,
        ),
        feature(
            Icon::Brain,
            "Machine Learning",
            "Implementing predictive models and machine learning algorithms to uncover patterns.",
            Tone::Accent,
        ),
        feature(
            Icon::Users,
            "Collaboration",
            "Working closely with stakeholders to understand business needs and deliver solutions.",
            Tone::Chart4,
        ),
    ]
}

fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup::new("Programming & Analysis", Icon::Code, Tone::Primary)
            .with_skill("Python", 90)
            .with_skill("SQL", 95)
            .with_skill("R", 85)
            .with_skill("Excel/VBA", 80),
        SkillGroup::new("Data Visualization", Icon::PieChart, Tone::Secondary)
            .with_skill("Tableau", 95)
            .with_skill("Power BI", 85)
            .with_skill("Matplotlib/Seaborn", 90)
            .with_skill("D3.js", 70),
        SkillGroup::new("Machine Learning", Icon::Cloud, Tone::Accent)
            .with_skill("Supervised Learning", 95)
            .with_skill("Unsupervised Learning", 95)
            .with_skill("Model Evaluation", 95)
            .with_skill("Feature Engineering", 95),
    ]
}

fn skill_highlights() -> Vec<SkillHighlight> {
    let highlight = |icon, title: &str, description: &str, tone| SkillHighlight {
        icon,
        title: title.into(),
        description: description.into(),
        tone,
    };
    vec![
        highlight(Icon::Cpu, "Deep Learning", "Neural Networks, CNNs", Tone::Primary),
        highlight(
            Icon::Code,
            "Machine Learning",
            "Scikit-learn, TensorFlow, PyTorch",
            Tone::Secondary,
        ),
        highlight(
            Icon::Cloud,
            "Database Systems",
            "PostgreSQL, MySQL, MongoDB",
            Tone::Chart4,
        ),
        highlight(
            Icon::PieChart,
            "ETL Tools",
            "Apache Airflow, Dataflow, Informatica",
            Tone::Accent,
        ),
    ]
}

fn certifications() -> Vec<Certification> {
    let cert = |title: &str,
                issuer: &str,
                description: &str,
                skills: &[&str],
                gradient: (&str, &str),
                logo: &str| Certification {
        title: title.into(),
        issuer: issuer.into(),
        description: description.into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        gradient: (gradient.0.into(), gradient.1.into()),
        logo: logo.into(),
    };
    vec![
        cert(
            "Google Data Analytics Professional Certificate",
            "Google",
            "Comprehensive training in data analysis, visualization, and SQL using real-world datasets.",
            &["Data Analysis", "SQL", "R Programming", "Tableau", "Data Visualization"],
            ("#3b82f6", "#22c55e"),
            "🔵",
        ),
        cert(
            "IBM Data Science Professional Certificate",
            "IBM",
            "In-depth training in data science methodologies, Python, machine learning, and AI.",
            &["Python", "Machine Learning", "Data Science", "SQL", "Data Visualization"],
            ("#2563eb", "#1e40af"),
            "🔷",
        ),
        cert(
            "IBM Machine Learning Professional Certificate",
            "IBM",
            "Advanced machine learning techniques including supervised, unsupervised learning and deep learning.",
            &["Machine Learning", "Deep Learning", "Neural Networks", "Scikit-learn", "TensorFlow"],
            ("#6366f1", "#9333ea"),
            "🔷",
        ),
        cert(
            "Google Advanced Data Analytics Certificate",
            "Google",
            "Advanced analytics including statistical analysis, regression models, and machine learning.",
            &["Statistical Analysis", "Regression", "Python", "Machine Learning", "Predictive Analytics"],
            ("#eab308", "#ef4444"),
            "🔵",
        ),
    ]
}

fn stats() -> Vec<Stat> {
    let stat = |icon, value: &str, label: &str| Stat {
        icon,
        value: value.into(),
        label: label.into(),
    };
    vec![
        stat(Icon::Award, "Fresher", "Experience"),
        stat(Icon::CheckCircle, "15+", "Completed Projects"),
        stat(Icon::Users, "500+", "Connections"),
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project::builder(
            "🧑‍💼 Employee Attrition Analysis",
            "Analyzed 14,999 employee records to uncover attrition drivers. Created a Random Forest \
             classifier achieving 97% accuracy after balancing the dataset. Designed 8 dynamic KPIs \
             in Power BI and deployed an interactive dashboard via Streamlit for real-time \
             attrition monitoring.",
            repo("Employee-Attrition-Prediction-App"),
        )
        .demo("https://quantum-flight-path.lovable.app/")
        .category("Python | Power BI")
        .tags(["Python", "XGBoost", "Power BI", "Streamlit"])
        .tone(Tone::Primary)
        .image("https://interimexecs.com/wp-content/uploads/2022/09/CEO_Turnover_social.png")
        .build(),
        Project::builder(
            "📈 Stock Market Forecasting using LSTM",
            "A deep learning project using Long Short-Term Memory (LSTM) neural networks to predict \
             stock market trends. Analyzes historical price data to forecast future stock prices \
             with time-series analysis.",
            repo("stock-market-forecasting-lstm"),
        )
        .demo("https://stockmaertprediction.vercel.app/")
        .category("Deep Learning")
        .tags(["Python", "LSTM", "TensorFlow", "Time Series"])
        .tone(Tone::Chart1)
        .image("https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&auto=format&fit=crop&q=60")
        .build(),
        Project::builder(
            "🚕 Uber Fare Prediction",
            "A machine learning regression model that predicts Uber fare prices based on various \
             factors like distance, time, location, and weather conditions to provide accurate \
             fare estimates.",
            repo("Uber-Fare-Prediction-Machine-Learning-Regression-Model"),
        )
        .category("Python")
        .tags(["Scikit-learn", "Regression", "Feature Engineering", "ML"])
        .tone(Tone::Secondary)
        .image("/assets/uber-fare.png")
        .build(),
        Project::builder(
            "🛍️ Customer Segmentation Analysis",
            "This project demonstrates how unsupervised learning techniques can uncover hidden \
             customer segments from raw behavioral data. By applying KMeans clustering and \
             Principal Component Analysis (PCA), we identify distinct customer groups that can \
             inform targeted marketing.",
            repo("Customer-Segmentation-Using-KMeans-PCA"),
        )
        .category("Python")
        .tags(["Pandas/Numpy", "Matplotlib / Seaborn", "K_means", "Streamlit"])
        .tone(Tone::Accent)
        .image("https://tse1.mm.bing.net/th/id/OIP.ydmg3d3TXoC7Y0WkW7ILrQHaEK?pid=Api&P=0&h=180")
        .build(),
        Project::builder(
            "Credit Risk Analysis - Loan Approval Prediction",
            "Applicants with high income, low loan amount requests, and a strong credit history \
             are significantly more likely to be approved for loans.",
            repo("Credit-Risk-Analysis-Loan-Approval-Prediction"),
        )
        .category("Python")
        .tags(["Pandas", "Matplotlib / Seaborn", "Scikit-learn", "Streamlit"])
        .tone(Tone::Chart4)
        .image("https://daxg39y63pxwu.cloudfront.net/images/blog/loan-prediction-using-machine-learning-project-source-code/Loan_Prediction_using__Machine_Learning_Project.png")
        .build(),
        Project::builder(
            "📧 Email Spam Detection using NLP",
            "A Natural Language Processing project that classifies emails as spam or legitimate \
             using machine learning techniques, helping filter out unwanted messages and enhance \
             email security.",
            repo("email-spam-classifier-nlp"),
        )
        .demo("https://email-spam-classifier-nlp-op8tjqyeeu5o6cz8a6k2yu.streamlit.app/")
        .category("Python")
        .tags(["NLP", "Scikit-learn", "Streamlit"])
        .tone(Tone::Accent)
        .image("/assets/email-spam.jpg")
        .build(),
        Project::builder(
            "🛍️ USA Regional Sales Analysis",
            "Processed 64K+ sales records across 5 regions by merging 6 Excel sheets. Cleaned and \
             engineered 30+ columns. Created Power BI dashboard with 12+ KPIs and DAX measures. \
             Insights improved budget alignment by 25% and reduced risk by 18%.",
            repo("Regional_-Sales_-Analysis-_IN_-USA"),
        )
        .category("Python | Power BI")
        .tags(["Python", "Pandas", "Power BI", "SQL"])
        .tone(Tone::Secondary)
        .image("https://leanexcelsolutions.com/wp-content/uploads/2022/11/Sales-Dashboard-in-Excel-Violet.png")
        .build(),
    ]
}

fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: "Email".into(),
            destination: format!("mailto:{}", EMAIL),
            display_text: EMAIL.into(),
            link_text: "Send me a message".into(),
            icon: Icon::Mail,
            tone: Tone::Primary,
        },
        ContactChannel {
            label: "LinkedIn".into(),
            destination: LINKEDIN.into(),
            display_text: "Connect with me professionally".into(),
            link_text: "View my profile".into(),
            icon: Icon::Linkedin,
            tone: Tone::Chart4,
        },
        ContactChannel {
            label: "GitHub".into(),
            destination: GITHUB.into(),
            display_text: "Check out my code and projects".into(),
            link_text: "View repositories".into(),
            icon: Icon::Github,
            tone: Tone::Secondary,
        },
    ]
}
