//! NestJS HTTP microservice archetype (decorators, DI, Clean Architecture layout)

use super::{render, Creator, TemplateSet};
use crate::config::ProjectConfig;

pub(crate) fn creator() -> Creator {
    Creator {
        kind: "microservice",
        stack: "nestjs",
        install_command: "npm install",
        next_steps: "npm run start:dev",
        templates,
    }
}

fn templates(config: &ProjectConfig) -> TemplateSet {
    let mut files = TemplateSet::new();
    for (path, body) in [
        ("package.json", PACKAGE_JSON),
        ("tsconfig.json", TSCONFIG),
        ("tsconfig.build.json", TSCONFIG_BUILD),
        ("nest-cli.json", NEST_CLI),
        (".gitignore", GITIGNORE),
        (".prettierrc", PRETTIERRC),
        ("README.md", README),
        ("src/main.ts", MAIN_TS),
        ("src/domain/entities/input.entity.ts", INPUT_ENTITY),
        ("src/domain/entities/result.entity.ts", RESULT_ENTITY),
        ("src/domain/entities/index.ts", ENTITIES_INDEX),
        ("src/domain/services/process.service.ts", PROCESS_SERVICE),
        ("src/domain/services/index.ts", SERVICES_INDEX),
        ("src/application/ports/process.port.ts", PROCESS_PORT),
        ("src/application/ports/index.ts", PORTS_INDEX),
        ("src/application/use-cases/process.use-case.ts", PROCESS_USE_CASE),
        ("src/application/use-cases/index.ts", USE_CASES_INDEX),
        ("src/infrastructure/http/dtos/process.dto.ts", PROCESS_DTO),
        ("src/infrastructure/http/dtos/index.ts", DTOS_INDEX),
        (
            "src/infrastructure/http/controllers/health.controller.ts",
            HEALTH_CONTROLLER,
        ),
        (
            "src/infrastructure/http/controllers/process.controller.ts",
            PROCESS_CONTROLLER,
        ),
        (
            "src/infrastructure/http/controllers/index.ts",
            CONTROLLERS_INDEX,
        ),
        ("src/infrastructure/http/app.module.ts", APP_MODULE),
    ] {
        files.insert(path.to_string(), render(body, config));
    }
    files
}

const PACKAGE_JSON: &str = r#"{
  "name": "{{name}}",
  "version": "1.0.0",
  "description": "{{description}}",
  "scripts": {
    "build": "nest build",
    "start": "nest start",
    "start:dev": "nest start --watch",
    "start:debug": "nest start --debug --watch",
    "start:prod": "node dist/main",
    "lint": "eslint \"{src,test}/**/*.ts\" --fix",
    "test": "jest",
    "test:watch": "jest --watch",
    "test:cov": "jest --coverage"
  },
  "dependencies": {
    "@nestjs/common": "^11.0.0",
    "@nestjs/core": "^11.0.0",
    "@nestjs/platform-express": "^11.0.0",
    "class-transformer": "^0.5.1",
    "class-validator": "^0.14.1",
    "reflect-metadata": "^0.2.0",
    "rxjs": "^7.8.1"
  },
  "devDependencies": {
    "@nestjs/cli": "^11.0.0",
    "@nestjs/schematics": "^11.0.0",
    "@nestjs/testing": "^11.0.0",
    "@types/express": "^5.0.0",
    "@types/jest": "^29.5.0",
    "@types/node": "^22.0.0",
    "@typescript-eslint/eslint-plugin": "^8.0.0",
    "@typescript-eslint/parser": "^8.0.0",
    "eslint": "^9.0.0",
    "eslint-config-prettier": "^10.0.0",
    "eslint-plugin-prettier": "^5.0.0",
    "jest": "^29.7.0",
    "prettier": "^3.0.0",
    "source-map-support": "^0.5.21",
    "ts-jest": "^29.2.0",
    "ts-loader": "^9.5.0",
    "ts-node": "^10.9.0",
    "tsconfig-paths": "^4.2.0",
    "typescript": "^5.7.0"
  },
  "jest": {
    "moduleFileExtensions": ["js", "json", "ts"],
    "rootDir": "src",
    "testRegex": ".*\\.spec\\.ts$",
    "transform": {
      "^.+\\.(t|j)s$": "ts-jest"
    },
    "collectCoverageFrom": ["**/*.(t|j)s"],
    "coverageDirectory": "../coverage",
    "testEnvironment": "node",
    "moduleNameMapper": {
      "^@domain/(.*)$": "<rootDir>/domain/$1",
      "^@application/(.*)$": "<rootDir>/application/$1",
      "^@infrastructure/(.*)$": "<rootDir>/infrastructure/$1"
    }
  }
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "module": "commonjs",
    "declaration": true,
    "removeComments": true,
    "emitDecoratorMetadata": true,
    "experimentalDecorators": true,
    "allowSyntheticDefaultImports": true,
    "target": "ES2022",
    "sourceMap": true,
    "outDir": "./dist",
    "baseUrl": "./",
    "incremental": true,
    "skipLibCheck": true,
    "strictNullChecks": true,
    "noImplicitAny": true,
    "strictBindCallApply": true,
    "forceConsistentCasingInFileNames": true,
    "noFallthroughCasesInSwitch": true,
    "paths": {
      "@domain/*": ["src/domain/*"],
      "@application/*": ["src/application/*"],
      "@infrastructure/*": ["src/infrastructure/*"]
    }
  }
}
"#;

const TSCONFIG_BUILD: &str = r#"{
  "extends": "./tsconfig.json",
  "exclude": ["node_modules", "test", "dist", "**/*spec.ts"]
}
"#;

const NEST_CLI: &str = r#"{
  "$schema": "https://json.schemastore.org/nest-cli",
  "collection": "@nestjs/schematics",
  "sourceRoot": "src",
  "compilerOptions": {
    "deleteOutDir": true
  }
}
"#;

const GITIGNORE: &str = r#"node_modules/
dist/
.env
.env.*
!.env.example
coverage/
.idea/
.vscode/
*.log
.DS_Store
"#;

const PRETTIERRC: &str = r#"{
  "singleQuote": true,
  "trailingComma": "all"
}
"#;

const README: &str = r#"# {{name}}

{{description}}

## Architecture

```
src/
├── domain/              # Business logic & entities
│   ├── entities/
│   └── services/
├── application/         # Use cases & ports
│   ├── ports/
│   └── use-cases/
└── infrastructure/      # External interfaces
    └── http/
        ├── controllers/
        └── dtos/
```

## Usage

```bash
npm install       # Install dependencies
npm run start:dev # Run in development mode
npm run build     # Build for production
npm run start:prod # Run in production mode
```

## Endpoints

- `GET /health` - Health check
- `POST /api/v1/process` - Process data
"#;

const MAIN_TS: &str = r#"import { NestFactory } from '@nestjs/core';
import { ValidationPipe } from '@nestjs/common';
import { AppModule } from '@infrastructure/http/app.module';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);

  app.useGlobalPipes(
    new ValidationPipe({
      whitelist: true,
      forbidNonWhitelisted: true,
      transform: true,
    }),
  );

  const port = process.env.PORT || 3000;
  await app.listen(port);
  console.log(`Server running on http://localhost:${port}`);
}

bootstrap();
"#;

const INPUT_ENTITY: &str = r#"export class Input {
  constructor(public readonly data: string) {}
}
"#;

const RESULT_ENTITY: &str = r#"import { randomUUID } from 'crypto';

export class Result {
  public readonly id: string;

  constructor(public readonly output: string) {
    this.id = randomUUID();
  }
}
"#;

const ENTITIES_INDEX: &str = r#"export * from './input.entity';
export * from './result.entity';
"#;

const PROCESS_SERVICE: &str = r#"import { Injectable } from '@nestjs/common';
import { Input, Result } from '@domain/entities';

@Injectable()
export class ProcessService {
  process(input: Input): Result {
    return new Result(`Processed: ${input.data}`);
  }
}
"#;

const SERVICES_INDEX: &str = r#"export * from './process.service';
"#;

const PROCESS_PORT: &str = r#"import { Input, Result } from '@domain/entities';

export interface ProcessPort {
  process(input: Input): Result;
}

export const PROCESS_PORT = Symbol('PROCESS_PORT');
"#;

const PORTS_INDEX: &str = r#"export * from './process.port';
"#;

const PROCESS_USE_CASE: &str = r#"import { Inject, Injectable } from '@nestjs/common';
import { Input, Result } from '@domain/entities';
import { PROCESS_PORT, ProcessPort } from '@application/ports';

@Injectable()
export class ProcessUseCase {
  constructor(
    @Inject(PROCESS_PORT)
    private readonly processPort: ProcessPort,
  ) {}

  execute(input: Input): Result {
    return this.processPort.process(input);
  }
}
"#;

const USE_CASES_INDEX: &str = r#"export * from './process.use-case';
"#;

const PROCESS_DTO: &str = r#"import { IsNotEmpty, IsString } from 'class-validator';

export class ProcessRequestDto {
  @IsString()
  @IsNotEmpty()
  data: string;
}

export class ProcessResponseDto {
  id: string;
  output: string;
}
"#;

const DTOS_INDEX: &str = r#"export * from './process.dto';
"#;

const HEALTH_CONTROLLER: &str = r#"import { Controller, Get } from '@nestjs/common';

@Controller('health')
export class HealthController {
  @Get()
  check() {
    return { status: 'ok' };
  }
}
"#;

const PROCESS_CONTROLLER: &str = r#"import { Body, Controller, Post } from '@nestjs/common';
import { Input } from '@domain/entities';
import { ProcessUseCase } from '@application/use-cases';
import { ProcessRequestDto, ProcessResponseDto } from '../dtos';

@Controller('api/v1')
export class ProcessController {
  constructor(private readonly processUseCase: ProcessUseCase) {}

  @Post('process')
  process(@Body() dto: ProcessRequestDto): ProcessResponseDto {
    const input = new Input(dto.data);
    const result = this.processUseCase.execute(input);

    return {
      id: result.id,
      output: result.output,
    };
  }
}
"#;

const CONTROLLERS_INDEX: &str = r#"export * from './health.controller';
export * from './process.controller';
"#;

const APP_MODULE: &str = r#"import { Module } from '@nestjs/common';
import { ProcessService } from '@domain/services';
import { PROCESS_PORT } from '@application/ports';
import { ProcessUseCase } from '@application/use-cases';
import { HealthController, ProcessController } from './controllers';

@Module({
  controllers: [HealthController, ProcessController],
  providers: [
    ProcessService,
    {
      provide: PROCESS_PORT,
      useExisting: ProcessService,
    },
    ProcessUseCase,
  ],
})
export class AppModule {}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig {
            name: "billing-api".to_string(),
            description: "Billing microservice".to_string(),
            features: vec![],
        }
    }

    #[test]
    fn test_metadata() {
        let c = creator();
        assert_eq!(c.kind, "microservice");
        assert_eq!(c.stack, "nestjs");
        assert_eq!(c.install_command, "npm install");
        assert_eq!(c.next_steps, "npm run start:dev");
    }

    #[test]
    fn test_package_json_interpolated() {
        let files = creator().render_templates(&config());
        let pkg = &files["package.json"];

        assert!(pkg.contains(r#""name": "billing-api""#));
        assert!(pkg.contains(r#""description": "Billing microservice""#));
        assert!(pkg.contains("@nestjs/platform-express"));
    }

    #[test]
    fn test_templates_contain_clean_architecture_tree() {
        let files = creator().render_templates(&config());

        for path in [
            "src/main.ts",
            "src/domain/services/process.service.ts",
            "src/application/use-cases/process.use-case.ts",
            "src/infrastructure/http/app.module.ts",
            "src/infrastructure/http/controllers/process.controller.ts",
        ] {
            assert!(files.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_empty_description_renders_empty() {
        let mut cfg = config();
        cfg.description = String::new();

        let files = creator().render_templates(&cfg);
        assert!(files["package.json"].contains(r#""description": """#));
    }
}
