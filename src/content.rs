//! Copy and static tables rendered by the sections.

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> Link {
    Link { label, href }
}

pub const NAV_ITEMS: &[Link] = &[
    link("Início", "#home"),
    link("Serviços", "#servicos"),
    link("Sobre", "#sobre"),
];

pub const CONTACT_ANCHOR: &str = "#contato";
pub const PORTFOLIO_ANCHOR: &str = "#portfolio";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { number: "150+", label: "Projetos" },
    Stat { number: "50+", label: "Clientes" },
    Stat { number: "5+", label: "Anos" },
];

pub const MARQUEE_WORDS: &[&str] = &[
    "BRANDING",
    "DESIGN",
    "MARKETING",
    "CRIATIVIDADE",
    "ESTRATÉGIA",
    "INOVAÇÃO",
    "RESULTADOS",
    "PUBLICIDADE",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Layers,
        title: "Branding",
        description: "Construímos identidades visuais marcantes que comunicam a essência da sua marca de forma única e memorável.",
        features: &["Logotipos", "Identidade Visual", "Manual de Marca"],
    },
    Service {
        icon: Icon::Layout,
        title: "Design Digital",
        description: "Criamos interfaces modernas e intuitivas que proporcionam experiências excepcionais para seus usuários.",
        features: &["UI/UX Design", "Web Design", "App Design"],
    },
    Service {
        icon: Icon::Pen,
        title: "Marketing Digital",
        description: "Desenvolvemos estratégias personalizadas para aumentar sua presença online e converter visitantes em clientes.",
        features: &["Social Media", "Google Ads", "SEO"],
    },
    Service {
        icon: Icon::Sparkle,
        title: "Criação de Conteúdo",
        description: "Produzimos conteúdos visuais impactantes que engajam seu público e fortalecem sua presença nas redes.",
        features: &["Fotografia", "Vídeo", "Motion Graphics"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Violet,
    Cyan,
    Pink,
    Amber,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Violet => "accent-violet",
            Accent::Cyan => "accent-cyan",
            Accent::Pink => "accent-pink",
            Accent::Amber => "accent-amber",
        }
    }

    /// `r, g, b` triple used for glows and shadows.
    pub fn rgb(self) -> &'static str {
        match self {
            Accent::Violet => "139, 92, 246",
            Accent::Cyan => "6, 182, 212",
            Accent::Pink => "236, 72, 153",
            Accent::Amber => "245, 158, 11",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Accent::Violet => "linear-gradient(135deg, #7c3aed, #5b21b6)",
            Accent::Cyan => "linear-gradient(135deg, #06b6d4, #1d4ed8)",
            Accent::Pink => "linear-gradient(135deg, #ec4899, #be123c)",
            Accent::Amber => "linear-gradient(135deg, #f59e0b, #c2410c)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        title: "Estratégia",
        subtitle: "Planejamento que gera resultados",
        description: "Analisamos seu mercado, concorrência e público-alvo para criar estratégias personalizadas que realmente funcionam.",
        accent: Accent::Violet,
    },
    ProcessStep {
        id: 2,
        title: "Design",
        subtitle: "Visual que conecta",
        description: "Transformamos conceitos em experiências visuais impactantes. Do branding ao digital, criamos designs únicos.",
        accent: Accent::Cyan,
    },
    ProcessStep {
        id: 3,
        title: "Execução",
        subtitle: "Ideias que saem do papel",
        description: "Colocamos tudo em prática com excelência e atenção aos detalhes em cada etapa do processo.",
        accent: Accent::Pink,
    },
    ProcessStep {
        id: 4,
        title: "Resultados",
        subtitle: "Métricas que importam",
        description: "Monitoramos e otimizamos continuamente para garantir o crescimento da sua marca.",
        accent: Accent::Amber,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video { src: &'static str },
    Slideshow { images: &'static [&'static str] },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaOption {
    pub id: &'static str,
    pub kind: MediaKind,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

impl MediaOption {
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video { .. })
    }

    pub fn slide_count(&self) -> usize {
        match self.kind {
            MediaKind::Video { .. } => 0,
            MediaKind::Slideshow { images } => images.len(),
        }
    }
}

pub const MEDIA_OPTIONS: &[MediaOption] = &[
    MediaOption {
        id: "producao",
        kind: MediaKind::Video { src: "/Video/video.mp4" },
        icon: Icon::Video,
        title: "Produção de Vídeo",
        description: "Conteúdo audiovisual de alta qualidade para sua marca",
    },
    MediaOption {
        id: "drone",
        kind: MediaKind::Video { src: "/Video/videodrone.mp4" },
        icon: Icon::Drone,
        title: "Drone 360°",
        description: "Capturas aéreas impressionantes e panorâmicas",
    },
    MediaOption {
        id: "fotografia",
        kind: MediaKind::Slideshow {
            images: &["/fotos/fotografia.png", "/fotos/fotografia2.png"],
        },
        icon: Icon::Camera,
        title: "Fotografia Profissional",
        description: "Imagens que capturam a essência do seu negócio",
    },
];

pub const ALL_CATEGORIES: &str = "Todos";

pub const PORTFOLIO_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Branding",
    "Digital",
    "Social Media",
    "Print",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Placeholder artwork until real cover images exist.
    pub gradient: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Caffeine Lab",
        category: "Branding",
        description: "Identidade visual completa para cafeteria artesanal",
        gradient: "linear-gradient(135deg, #7c3aed, #6b21a8)",
        tags: &["Logo", "Identidade", "Embalagem"],
    },
    Project {
        id: 2,
        title: "TechVision",
        category: "Digital",
        description: "Redesign de plataforma SaaS",
        gradient: "linear-gradient(135deg, #0891b2, #1e40af)",
        tags: &["UI/UX", "Web", "Dashboard"],
    },
    Project {
        id: 3,
        title: "Urban Fitness",
        category: "Social Media",
        description: "Campanha de lançamento nas redes sociais",
        gradient: "linear-gradient(135deg, #db2777, #9f1239)",
        tags: &["Instagram", "Ads", "Motion"],
    },
    Project {
        id: 4,
        title: "Natura Cosmetics",
        category: "Branding",
        description: "Rebranding e nova linha de produtos",
        gradient: "linear-gradient(135deg, #059669, #115e59)",
        tags: &["Rebrand", "Packaging", "Print"],
    },
    Project {
        id: 5,
        title: "FinanceFlow",
        category: "Digital",
        description: "App de controle financeiro pessoal",
        gradient: "linear-gradient(135deg, #d97706, #9a3412)",
        tags: &["App", "UI/UX", "Motion"],
    },
    Project {
        id: 6,
        title: "Gourmet House",
        category: "Print",
        description: "Material gráfico para restaurante premium",
        gradient: "linear-gradient(135deg, #dc2626, #9f1239)",
        tags: &["Cardápio", "Print", "Brand"],
    },
];

pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| category == ALL_CATEGORIES || project.category == category)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: Icon::Compass,
        title: "Criatividade",
        description: "Pensamos fora da caixa para criar soluções únicas e memoráveis.",
    },
    Value {
        icon: Icon::Info,
        title: "Estratégia",
        description: "Cada projeto é pensado com objetivos claros e mensuráveis.",
    },
    Value {
        icon: Icon::Users,
        title: "Parceria",
        description: "Trabalhamos junto com você para alcançar os melhores resultados.",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "A MAKII é uma agência e produtora digital com sede em Manaus que conecta marcas ao sucesso por meio de estratégias criativas e resultados reais. Especializa-se em tráfego pago, gestão de redes sociais, produção de conteúdo, cobertura de eventos e captação de imagens com drone 360°.",
    "Orgulha-se de ajudar empresas a se destacarem no mercado e criar experiências visuais impactantes. A equipe é composta por profissionais apaixonados por inovação e comprometidos com a excelência.",
    "Acredita que cada marca tem uma história única e busca transformá-la em algo memorável.",
];

pub const FOOTER_NAVIGATION: &[Link] = &[
    link("Início", "#home"),
    link("Serviços", "#servicos"),
    link("Portfólio", "#portfolio"),
    link("Sobre", "#sobre"),
    link("Contato", "#contato"),
];

pub const FOOTER_SERVICES: &[Link] = &[
    link("Branding", "#servicos"),
    link("Design Digital", "#servicos"),
    link("Marketing Digital", "#servicos"),
    link("Social Media", "#servicos"),
    link("Criação de Conteúdo", "#servicos"),
];

pub const FOOTER_LEGAL: &[Link] = &[
    link("Política de Privacidade", "#"),
    link("Termos de Uso", "#"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Instagram", href: crate::config::INSTAGRAM_URL, icon: Icon::Instagram },
    SocialLink { name: "LinkedIn", href: "#", icon: Icon::LinkedIn },
    SocialLink { name: "Behance", href: "#", icon: Icon::Behance },
    SocialLink { name: "WhatsApp", href: "#contato", icon: Icon::Chat },
];

#[cfg(test)]
mod tests {
    use super::*;

    // Section ids rendered by the page
    const ANCHORS: [&str; 5] = ["#home", "#servicos", "#sobre", "#contato", "#portfolio"];

    #[test]
    fn all_category_returns_every_project() {
        assert_eq!(filter_projects(ALL_CATEGORIES).len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let branding = filter_projects("Branding");
        let titles: Vec<&str> = branding.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Caffeine Lab", "Natura Cosmetics"]);
        assert!(filter_projects("Video").is_empty());
    }

    #[test]
    fn every_category_tab_has_projects() {
        for category in PORTFOLIO_CATEGORIES {
            assert!(!filter_projects(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn internal_links_point_at_known_anchors() {
        let internal = NAV_ITEMS
            .iter()
            .chain(FOOTER_NAVIGATION)
            .chain(FOOTER_SERVICES)
            .map(|l| l.href)
            .chain([CONTACT_ANCHOR, PORTFOLIO_ANCHOR]);
        for href in internal {
            assert!(ANCHORS.contains(&href), "{href} has no target section");
        }
    }

    #[test]
    fn showcase_has_videos_and_one_slideshow() {
        assert!(MEDIA_OPTIONS[0].is_video());
        let slideshows: Vec<_> = MEDIA_OPTIONS.iter().filter(|m| !m.is_video()).collect();
        assert_eq!(slideshows.len(), 1);
        assert_eq!(slideshows[0].slide_count(), 2);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (index, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.id as usize, index + 1);
        }
    }
}
