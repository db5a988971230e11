//! Built-in canned responses, one per intent.

use pagebot_types::intent::Intent;

const PROJECTS: &str = "\u{1F4BC} Highlighted Projects:
- LTMS Website Project \u{2014} Internal system with dashboards, user auth, and admin controls. (PHP, MySQL, XAMPP)
- AI-Powered Knowledge Assistant \u{2014} Uses FAISS, ChromaDB, and LLM APIs for semantic search.
- Django UI Tool \u{2014} Clean, responsive UI for internal tools.
- Secure Role-Based System \u{2014} Custom ChromaDB login with role access.
- AI-Powered File Processor \u{2014} Upload, transcribe, detect issues, suggest AI solutions.

Which one would you like to explore?";

const SKILLS: &str = "\u{1F6E0} Technical Skills:
- Web Development: React, TypeScript, Django, FastAPI
- Databases: PostgreSQL, MySQL, SQL Server, Redis
- AI Integration: FAISS, ChromaDB, LLM APIs
- UI/UX: Tailwind CSS, responsive design principles
- DevOps: Netlify, Docker, deployment best practices";

const AI: &str = "\u{1F916} AI Expertise:
- Vector embeddings with FAISS
- Semantic search using ChromaDB
- LLM integration for intelligent responses
- Predictive analytics with TensorFlow
- Focus on AI that enhances user experience";

const CONTACT: &str = "\u{1F4C7} Contact Information:
- Email: use the contact form on this page
- LinkedIn: see the profile link in the page header
- Phone/WhatsApp: shared on request

\u{1F4CC} Process:
1. Discovery Call
2. Proposal
3. Development
4. Success \u{1F680}";

const EXPERIENCE: &str = "\u{1F4DC} Experience & Background:
- 7-month AI Developer Internship
- Degree in Computer Science, specializing in Software Engineering
- Experience as Group Lead, Full Stack Developer, and Lead UI Developer
- Passion for AI, software innovation, and practical integrations";

const ABOUT: &str = "\u{1F44B} About Me:
I'm like a sponge: constantly soaking up knowledge, adaptable, and always ready to learn something new.
Fueled by coffee \u{2615}, I can grind through projects fast while making smart use of tools.
Outside coding, I sing, play sports, and value work-life balance. I want to stay fit and healthy while delivering results.
I'm deeply curious about AI and how we can integrate it into daily life to make it easier, more productive, and a bit more fun.";

const FALLBACK: &str = "That's an interesting question!
I can tell you more about:
- My projects
- Technical skills
- AI expertise
- Experience & background
- How to get in touch

What would you like to know more about?";

/// The stock response for `intent`.
///
/// Exhaustive over `Intent`, so adding a variant without a template is a
/// compile error rather than a runtime gap.
pub fn generate(intent: Intent) -> &'static str {
    match intent {
        Intent::Projects => PROJECTS,
        Intent::Skills => SKILLS,
        Intent::Ai => AI,
        Intent::Contact => CONTACT,
        Intent::Experience => EXPERIENCE,
        Intent::About => ABOUT,
        Intent::Fallback => FALLBACK,
    }
}
