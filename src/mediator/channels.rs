use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Discipline {
    Research,
    Design,
    Engineering,
    #[serde(rename = "QA")]
    Qa,
    Marketing,
}

impl Discipline {
    pub const ALL: [Discipline; 5] = [
        Discipline::Research,
        Discipline::Design,
        Discipline::Engineering,
        Discipline::Qa,
        Discipline::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Research => "Research",
            Discipline::Design => "Design",
            Discipline::Engineering => "Engineering",
            Discipline::Qa => "QA",
            Discipline::Marketing => "Marketing",
        }
    }

    pub fn brief(&self) -> &'static ChannelBrief {
        match self {
            Discipline::Research => &CHANNEL_BRIEFS[0],
            Discipline::Design => &CHANNEL_BRIEFS[1],
            Discipline::Engineering => &CHANNEL_BRIEFS[2],
            Discipline::Qa => &CHANNEL_BRIEFS[3],
            Discipline::Marketing => &CHANNEL_BRIEFS[4],
        }
    }

    pub fn templates(&self) -> &'static [UpdateTemplate] {
        match self {
            Discipline::Research => &RESEARCH_UPDATES,
            Discipline::Design => &DESIGN_UPDATES,
            Discipline::Engineering => &ENGINEERING_UPDATES,
            Discipline::Qa => &QA_UPDATES,
            Discipline::Marketing => &MARKETING_UPDATES,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Discipline::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Discipline::ALL.iter().map(|d| d.as_str()).collect();
                GalleryError::unknown_discipline(s, &names)
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelBrief {
    pub id: Discipline,
    pub label: &'static str,
    pub summary: &'static str,
    pub accent: &'static str,
}

pub static CHANNEL_BRIEFS: [ChannelBrief; 5] = [
    ChannelBrief {
        id: Discipline::Research,
        label: "Research",
        summary: "문제 정의와 기회 영역을 탐색합니다.",
        accent: "#fef3c7",
    },
    ChannelBrief {
        id: Discipline::Design,
        label: "Design",
        summary: "핵심 플로우와 시각 시스템을 조율합니다.",
        accent: "#ede9fe",
    },
    ChannelBrief {
        id: Discipline::Engineering,
        label: "Engineering",
        summary: "기술 제약과 배포 경로를 확정합니다.",
        accent: "#cffafe",
    },
    ChannelBrief {
        id: Discipline::Qa,
        label: "QA",
        summary: "릴리즈 후보를 검증하고 리스크를 기록합니다.",
        accent: "#fee2e2",
    },
    ChannelBrief {
        id: Discipline::Marketing,
        label: "Marketing",
        summary: "시장 메시지와 런치 캠페인을 동기화합니다.",
        accent: "#ecfccb",
    },
];

/// Canned status update a discipline can broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTemplate {
    pub summary: &'static str,
    pub routed_to: &'static [Discipline],
    pub nudge: &'static str,
}

static RESEARCH_UPDATES: [UpdateTemplate; 2] = [
    UpdateTemplate {
        summary: "신규 페르소나 인터뷰 6건 분석 완료",
        routed_to: &[Discipline::Design, Discipline::Marketing],
        nudge: "UX 스토리 업데이트 필요",
    },
    UpdateTemplate {
        summary: "리텐션 저하 원인 3가지 가설 정리",
        routed_to: &[Discipline::Design, Discipline::Engineering],
        nudge: "기능 플래그 비교 실험 요청",
    },
];

static DESIGN_UPDATES: [UpdateTemplate; 2] = [
    UpdateTemplate {
        summary: "온보딩 플로우 와이어프레임 v2 공유",
        routed_to: &[Discipline::Engineering, Discipline::Qa],
        nudge: "제스처 정책 리뷰 필요",
    },
    UpdateTemplate {
        summary: "앱 다크모드 토큰 초안 배포",
        routed_to: &[Discipline::Engineering, Discipline::Marketing],
        nudge: "마케팅 시각 자료와 색상 동기화",
    },
];

static ENGINEERING_UPDATES: [UpdateTemplate; 2] = [
    UpdateTemplate {
        summary: "실시간 동기화 엔진 부하 테스트 통과",
        routed_to: &[Discipline::Qa, Discipline::Marketing],
        nudge: "성능 수치 기반 메시지 준비",
    },
    UpdateTemplate {
        summary: "새 API 한도 정책 Dev 환경에 반영",
        routed_to: &[Discipline::Design, Discipline::Qa],
        nudge: "에러 상태 화면 점검 필요",
    },
];

static QA_UPDATES: [UpdateTemplate; 2] = [
    UpdateTemplate {
        summary: "E2E 시나리오 42건 중 39건 통과",
        routed_to: &[Discipline::Engineering],
        nudge: "실패 케이스 패치 ETA 요청",
    },
    UpdateTemplate {
        summary: "앱 스토어 심사 체크리스트 업데이트",
        routed_to: &[Discipline::Marketing, Discipline::Engineering],
        nudge: "메타데이터/권한 항목 재확인",
    },
];

static MARKETING_UPDATES: [UpdateTemplate; 2] = [
    UpdateTemplate {
        summary: "프리뷰 영상 스토리보드 최종 승인",
        routed_to: &[Discipline::Design],
        nudge: "UI 캡처 전달 부탁",
    },
    UpdateTemplate {
        summary: "랠리 캠페인 랜딩 초안 배포",
        routed_to: &[Discipline::Research, Discipline::Engineering],
        nudge: "핵심 수치 검증 요청",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_matches_discipline() {
        for discipline in Discipline::ALL {
            let brief = discipline.brief();
            assert_eq!(brief.id, discipline);
            assert_eq!(brief.label, discipline.as_str());
        }
    }

    #[test]
    fn test_templates_never_route_to_sender() {
        for discipline in Discipline::ALL {
            let templates = discipline.templates();
            assert!(!templates.is_empty());
            for template in templates {
                assert!(!template.routed_to.is_empty());
                assert!(!template.routed_to.contains(&discipline));
            }
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("qa".parse::<Discipline>().unwrap(), Discipline::Qa);
        assert_eq!("Marketing".parse::<Discipline>().unwrap(), Discipline::Marketing);
        assert!(matches!(
            "Sales".parse::<Discipline>(),
            Err(GalleryError::UnknownDiscipline { .. })
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Discipline::Qa).unwrap(), "\"QA\"");
        assert_eq!(serde_json::to_string(&Discipline::Design).unwrap(), "\"Design\"");
    }
}
