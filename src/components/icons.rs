use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Layers,
    Layout,
    Pen,
    Sparkle,
    Video,
    Drone,
    Camera,
    Compass,
    Info,
    Users,
    Mail,
    WhatsApp,
    Instagram,
    LinkedIn,
    Behance,
    Chat,
    ArrowRight,
    ArrowUpRight,
    ArrowDown,
    ChevronLeft,
    ChevronRight,
    Play,
    Pause,
    VolumeOff,
    VolumeOn,
    Image,
    Send,
}

const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

const BEHANCE_PATH: &str = "M22 7h-7V5h7v2zm1.726 10c-.442 1.297-2.029 3-5.101 3-3.074 0-5.564-1.729-5.564-5.675 0-3.91 2.325-5.92 5.466-5.92 3.082 0 4.964 1.782 5.375 4.426.078.506.109 1.188.095 2.14H15.97c.13 1.545.928 2.346 2.555 2.346 1.36 0 2.197-.692 2.56-1.484l2.64.167zm-5.498-4.18c-.106-.956-.722-1.82-2.02-1.82-1.476 0-2.095.908-2.186 1.82h4.206z";

fn outline(size: u32, stroke_width: &'static str, body: Html) -> Html {
    let size = size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={stroke_width}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

fn filled(size: u32, body: Html) -> Html {
    let size = size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

pub fn render(icon: Icon, size: u32) -> Html {
    match icon {
        Icon::Layers => outline(size, "1.5", html! {
            <>
                <path d="M12 2L2 7l10 5 10-5-10-5z" />
                <path d="M2 17l10 5 10-5" />
                <path d="M2 12l10 5 10-5" />
            </>
        }),
        Icon::Layout => outline(size, "1.5", html! {
            <>
                <rect width="18" height="18" x="3" y="3" rx="2" />
                <path d="M3 9h18" />
                <path d="M9 21V9" />
            </>
        }),
        Icon::Pen => outline(size, "1.5", html! {
            <>
                <path d="M12 20h9" />
                <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z" />
            </>
        }),
        Icon::Sparkle => outline(size, "1.5", html! {
            <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
        }),
        Icon::Video => outline(size, "1.5", html! {
            <>
                <path d="m22 8-6 4 6 4V8Z" />
                <rect width="14" height="12" x="2" y="6" rx="2" ry="2" />
            </>
        }),
        Icon::Drone => outline(size, "1.5", html! {
            <>
                <path d="M12 2L8 6h8l-4-4z" />
                <path d="M12 22l4-4H8l4 4z" />
                <path d="M2 12l4-4v8l-4-4z" />
                <path d="M22 12l-4 4V8l4 4z" />
                <circle cx="12" cy="12" r="4" />
            </>
        }),
        Icon::Camera => outline(size, "1.5", html! {
            <>
                <path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" />
                <circle cx="12" cy="13" r="3" />
            </>
        }),
        Icon::Compass => outline(size, "1.5", html! {
            <>
                <path d="M12 2v4" />
                <path d="m6.8 14-3.5 2" />
                <path d="m20.7 16-3.5-2" />
                <path d="M6.8 10 3.3 8" />
                <path d="m20.7 8-3.5 2" />
                <path d="m9 22 3-8 3 8" />
                <path d="M8 22h8" />
                <path d="M12 6a4 4 0 0 0 0 8" />
            </>
        }),
        Icon::Info => outline(size, "1.5", html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M12 16v-4" />
                <path d="M12 8h.01" />
            </>
        }),
        Icon::Users => outline(size, "1.5", html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        }),
        Icon::Mail => outline(size, "1.5", html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        }),
        Icon::WhatsApp => filled(size, html! { <path d={WHATSAPP_PATH} /> }),
        Icon::Instagram => outline(size, "1.5", html! {
            <>
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        }),
        Icon::LinkedIn => outline(size, "1.5", html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        }),
        Icon::Behance => filled(size, html! { <path d={BEHANCE_PATH} /> }),
        Icon::Chat => outline(size, "1.5", html! {
            <path d="M3 21l1.65-3.8a9 9 0 1 1 3.4 2.9L3 21" />
        }),
        Icon::ArrowRight => outline(size, "2", html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        }),
        Icon::ArrowUpRight => outline(size, "2", html! {
            <>
                <path d="M7 17 17 7" />
                <path d="M7 7h10v10" />
            </>
        }),
        Icon::ArrowDown => outline(size, "2", html! { <path d="M12 5v14M5 12l7 7 7-7" /> }),
        Icon::ChevronLeft => outline(size, "2", html! { <path d="m15 18-6-6 6-6" /> }),
        Icon::ChevronRight => outline(size, "2", html! { <path d="m9 18 6-6-6-6" /> }),
        Icon::Play => filled(size, html! { <polygon points="5 3 19 12 5 21 5 3" /> }),
        Icon::Pause => filled(size, html! {
            <>
                <rect x="6" y="4" width="4" height="16" />
                <rect x="14" y="4" width="4" height="16" />
            </>
        }),
        Icon::VolumeOff => outline(size, "2", html! {
            <>
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" />
                <line x1="23" y1="9" x2="17" y2="15" />
                <line x1="17" y1="9" x2="23" y2="15" />
            </>
        }),
        Icon::VolumeOn => outline(size, "2", html! {
            <>
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" />
                <path d="M19.07 4.93a10 10 0 0 1 0 14.14M15.54 8.46a5 5 0 0 1 0 7.07" />
            </>
        }),
        Icon::Image => outline(size, "1.5", html! {
            <>
                <rect width="18" height="18" x="3" y="3" rx="2" ry="2" />
                <circle cx="9" cy="9" r="2" />
                <path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" />
            </>
        }),
        Icon::Send => outline(size, "2", html! {
            <>
                <path d="m22 2-7 20-4-9-9-4Z" />
                <path d="M22 2 11 13" />
            </>
        }),
    }
}
