//! Built-in ArkTS template catalog.
//!
//! The seven blueprints arkgen ships with, embedded as static specs. Bodies
//! are opaque ArkTS/JSON5 payload text; the engine only substitutes the
//! `{{NAME}}` placeholders each spec declares.

use arkgen_core::{
    application::ports::TemplateCatalog,
    domain::{
        PARAM_PASCAL_NAME, PARAM_PROJECT_NAME, PARAM_PROJECT_NAME_LOWER, TemplateId, TemplateSpec,
    },
    error::ArkgenResult,
};

static COMPONENT: TemplateSpec = TemplateSpec::new(
    TemplateId::Component,
    &[PARAM_PASCAL_NAME],
    r##"/**
 * {{PASCAL_NAME}} custom component
 *
 * @example
 * {{PASCAL_NAME}}({
 *   title: 'Title',
 *   onClick: () => {
 *     console.info('Clicked');
 *   }
 * })
 */
@Component
export struct {{PASCAL_NAME}} {
  // Passed in by the parent (one-way sync)
  @Prop title: string = '';

  // Two-way binding with the parent
  @Link isSelected: boolean;

  // Internal component state
  @State private internalState: string = '';

  // Callbacks
  private onClick?: () => void;
  private onLongPress?: () => void;

  aboutToAppear() {
    console.info('[{{PASCAL_NAME}}] aboutToAppear');
    this.initialize();
  }

  aboutToDisappear() {
    console.info('[{{PASCAL_NAME}}] aboutToDisappear');
    this.cleanup();
  }

  private initialize() {
    // TODO: initialization logic
  }

  private cleanup() {
    // TODO: cleanup logic
  }

  private handleClick() {
    console.info('[{{PASCAL_NAME}}] handleClick');
    this.onClick?.();
  }

  private handleLongPress() {
    console.info('[{{PASCAL_NAME}}] handleLongPress');
    this.onLongPress?.();
  }

  build() {
    Column() {
      // TODO: implement component UI
      Text(this.title)
        .fontSize(16)
        .fontColor('#333333')

      Text('This is a custom component template')
        .fontSize(14)
        .fontColor('#999999')
        .margin({ top: 8 })
    }
    .width('100%')
    .padding(16)
    .backgroundColor('#FFFFFF')
    .borderRadius(8)
    .onClick(() => this.handleClick())
    .gesture(
      LongPressGesture({ repeat: false })
        .onAction(() => this.handleLongPress())
    )
  }
}

/**
 * Component preview (development only)
 */
@Preview
@Component
struct {{PASCAL_NAME}}Preview {
  @State isSelected: boolean = false;

  build() {
    Column({ space: 12 }) {
      {{PASCAL_NAME}}({
        title: 'Example title',
        isSelected: $isSelected,
        onClick: () => {
          console.info('Preview clicked');
        }
      })

      Text(`Selected: ${this.isSelected}`)
        .fontSize(14)
        .fontColor('#666666')

      Button('Toggle selection')
        .onClick(() => {
          this.isSelected = !this.isSelected;
        })
    }
    .width('100%')
    .padding(16)
    .backgroundColor('#F5F5F5')
  }
}
"##,
);

static PAGE: TemplateSpec = TemplateSpec::new(
    TemplateId::Page,
    &[PARAM_PASCAL_NAME],
    r##"import router from '@ohos.router';

/**
 * {{PASCAL_NAME}} page
 */
@Entry
@Component
struct {{PASCAL_NAME}} {
  @State message: string = '{{PASCAL_NAME}}';
  @State isLoading: boolean = false;

  aboutToAppear() {
    console.info('[{{PASCAL_NAME}}] aboutToAppear');
    this.loadData();
  }

  aboutToDisappear() {
    console.info('[{{PASCAL_NAME}}] aboutToDisappear');
  }

  async loadData() {
    this.isLoading = true;
    try {
      // TODO: implement data loading
      console.info('[{{PASCAL_NAME}}] Loading data...');
    } catch (err) {
      console.error('[{{PASCAL_NAME}}] Load data error:', JSON.stringify(err));
    } finally {
      this.isLoading = false;
    }
  }

  goBack() {
    router.back();
  }

  build() {
    Column() {
      // Title bar
      Row() {
        Image($r('app.media.ic_back'))
          .width(24)
          .height(24)
          .onClick(() => this.goBack())

        Text(this.message)
          .fontSize(18)
          .fontWeight(FontWeight.Bold)
          .layoutWeight(1)
          .textAlign(TextAlign.Center)

        // Spacer to keep the title centered
        Blank().width(24)
      }
      .width('100%')
      .height(56)
      .padding({ left: 16, right: 16 })
      .backgroundColor('#FFFFFF')

      // Content area
      if (this.isLoading) {
        Column() {
          LoadingProgress()
            .width(50)
            .height(50)
          Text('Loading...')
            .margin({ top: 12 })
            .fontSize(14)
            .fontColor('#999999')
        }
        .width('100%')
        .layoutWeight(1)
        .justifyContent(FlexAlign.Center)
      } else {
        Column() {
          Text('Page content')
            .fontSize(16)
        }
        .width('100%')
        .layoutWeight(1)
        .padding(16)
      }
    }
    .width('100%')
    .height('100%')
    .backgroundColor('#F5F5F5')
  }
}
"##,
);

static ENTRY_ABILITY: TemplateSpec = TemplateSpec::new(
    TemplateId::EntryAbility,
    &[],
    r##"import UIAbility from '@ohos.app.ability.UIAbility';
import window from '@ohos.window';

export default class EntryAbility extends UIAbility {
  onCreate(want, launchParam) {
    console.info('[EntryAbility] onCreate');
  }

  onDestroy() {
    console.info('[EntryAbility] onDestroy');
  }

  onWindowStageCreate(windowStage: window.WindowStage) {
    console.info('[EntryAbility] onWindowStageCreate');
    windowStage.loadContent('pages/Index', (err, data) => {
      if (err.code) {
        console.error('Failed to load content. Cause: ' + JSON.stringify(err));
        return;
      }
      console.info('Succeeded in loading content.');
    });
  }

  onWindowStageDestroy() {
    console.info('[EntryAbility] onWindowStageDestroy');
  }

  onForeground() {
    console.info('[EntryAbility] onForeground');
  }

  onBackground() {
    console.info('[EntryAbility] onBackground');
  }
}
"##,
);

static INDEX_PAGE: TemplateSpec = TemplateSpec::new(
    TemplateId::IndexPage,
    &[],
    r##"@Entry
@Component
struct Index {
  @State message: string = 'Hello World';

  build() {
    Row() {
      Column() {
        Text(this.message)
          .fontSize(50)
          .fontWeight(FontWeight.Bold)

        Button('Click Me')
          .fontSize(20)
          .width(200)
          .height(50)
          .margin({ top: 20 })
          .onClick(() => {
            this.message = 'Hello HarmonyOS NEXT!';
          })
      }
      .width('100%')
    }
    .height('100%')
  }
}
"##,
);

static APP_MANIFEST: TemplateSpec = TemplateSpec::new(
    TemplateId::AppManifest,
    &[PARAM_PROJECT_NAME_LOWER],
    r##"{
  "app": {
    "bundleName": "com.example.{{PROJECT_NAME_LOWER}}",
    "vendor": "example",
    "versionCode": 1000000,
    "versionName": "1.0.0",
    "icon": "$media:app_icon",
    "label": "$string:app_name",
    "targetAPIVersion": 12
  }
}
"##,
);

static MODULE_MANIFEST: TemplateSpec = TemplateSpec::new(
    TemplateId::ModuleManifest,
    &[],
    r##"{
  "module": {
    "name": "entry",
    "type": "entry",
    "description": "$string:module_desc",
    "mainElement": "EntryAbility",
    "deviceTypes": [
      "default",
      "tablet"
    ],
    "deliveryWithInstall": true,
    "installationFree": false,
    "pages": "$profile:main_pages",
    "abilities": [
      {
        "name": "EntryAbility",
        "srcEntry": "./ets/entryability/EntryAbility.ets",
        "description": "$string:EntryAbility_desc",
        "icon": "$media:icon",
        "label": "$string:EntryAbility_label",
        "startWindowIcon": "$media:icon",
        "startWindowBackground": "$color:start_window_background",
        "exported": true,
        "skills": [
          {
            "entities": [
              "entity.system.home"
            ],
            "actions": [
              "action.system.home"
            ]
          }
        ]
      }
    ]
  }
}
"##,
);

static LOGGER_UTIL: TemplateSpec = TemplateSpec::new(
    TemplateId::LoggerUtil,
    &[PARAM_PROJECT_NAME],
    r##"import hilog from '@ohos.hilog';

export class Logger {
  private static DOMAIN: number = 0x0001;
  private static TAG: string = '{{PROJECT_NAME}}';

  static debug(message: string, ...args: unknown[]): void {
    hilog.debug(this.DOMAIN, this.TAG, message, ...args);
  }

  static info(message: string, ...args: unknown[]): void {
    hilog.info(this.DOMAIN, this.TAG, message, ...args);
  }

  static warn(message: string, ...args: unknown[]): void {
    hilog.warn(this.DOMAIN, this.TAG, message, ...args);
  }

  static error(message: string, ...args: unknown[]): void {
    hilog.error(this.DOMAIN, this.TAG, message, ...args);
  }
}
"##,
);

/// Catalog over the embedded template specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// All built-in specs, for validation and listing.
    pub fn all() -> [&'static TemplateSpec; 7] {
        [
            &COMPONENT,
            &PAGE,
            &ENTRY_ABILITY,
            &INDEX_PAGE,
            &APP_MANIFEST,
            &MODULE_MANIFEST,
            &LOGGER_UTIL,
        ]
    }

    /// Check every embedded body against its declared parameters.
    ///
    /// A mismatch is a packaging defect, so the CLI runs this once at
    /// startup rather than trusting the embedded text.
    pub fn validate_all() -> ArkgenResult<()> {
        for spec in Self::all() {
            spec.validate()?;
        }
        Ok(())
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn get(&self, id: TemplateId) -> ArkgenResult<&TemplateSpec> {
        Ok(match id {
            TemplateId::Component => &COMPONENT,
            TemplateId::Page => &PAGE,
            TemplateId::EntryAbility => &ENTRY_ABILITY,
            TemplateId::IndexPage => &INDEX_PAGE,
            TemplateId::AppManifest => &APP_MANIFEST,
            TemplateId::ModuleManifest => &MODULE_MANIFEST,
            TemplateId::LoggerUtil => &LOGGER_UTIL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgen_core::domain::{ParameterBinding, substitute};

    #[test]
    fn every_builtin_spec_validates() {
        BuiltinCatalog::validate_all().unwrap();
    }

    #[test]
    fn catalog_resolves_every_id_to_its_own_spec() {
        let catalog = BuiltinCatalog::new();
        for spec in BuiltinCatalog::all() {
            let resolved = catalog.get(spec.id).unwrap();
            assert_eq!(resolved.id, spec.id);
        }
    }

    #[test]
    fn component_body_is_fully_parameterized_by_pascal_name() {
        let binding = ParameterBinding::new().with(PARAM_PASCAL_NAME, "CustomButton");
        let out = substitute(COMPONENT.id, COMPONENT.body, &binding).unwrap();
        assert!(out.contains("export struct CustomButton {"));
        assert!(out.contains("struct CustomButtonPreview {"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn app_manifest_lowercases_through_its_parameter() {
        let binding = ParameterBinding::new().with(PARAM_PROJECT_NAME_LOWER, "myapp");
        let out = substitute(APP_MANIFEST.id, APP_MANIFEST.body, &binding).unwrap();
        assert!(out.contains("\"bundleName\": \"com.example.myapp\""));
    }

    #[test]
    fn logger_tags_with_the_verbatim_project_name() {
        let binding = ParameterBinding::new().with(PARAM_PROJECT_NAME, "MyApp");
        let out = substitute(LOGGER_UTIL.id, LOGGER_UTIL.body, &binding).unwrap();
        assert!(out.contains("TAG: string = 'MyApp'"));
    }

    #[test]
    fn literal_bodies_contain_no_placeholders() {
        let empty = ParameterBinding::new();
        for spec in [&ENTRY_ABILITY, &INDEX_PAGE, &MODULE_MANIFEST] {
            let out = substitute(spec.id, spec.body, &empty).unwrap();
            assert_eq!(out, spec.body);
        }
    }
}
